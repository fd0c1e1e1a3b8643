use chrono::NaiveDate;

use shopdesk_runtime::{Console, MemorySessionStore, PanelSettings};

use crate::sink::MemoryExportSink;
use crate::transport::MockTransport;

/// A console wired to a [`MockTransport`], with handles to everything a test
/// wants to inspect afterwards.
pub struct TestConsole {
    pub console: Console,
    pub transport: MockTransport,
    pub sink: MemoryExportSink,
    pub store: MemorySessionStore,
}

impl TestConsole {
    pub fn builder() -> TestConsoleBuilder {
        TestConsoleBuilder::default()
    }

    /// Signed-in console over `transport`, with the clock pinned to 2024-05-15.
    pub fn signed_in(transport: &MockTransport) -> Self {
        Self::builder().transport(transport.clone()).signed_in().build()
    }
}

pub struct TestConsoleBuilder {
    transport: MockTransport,
    authenticated: bool,
    settings: PanelSettings,
    today: Option<NaiveDate>,
}

impl Default for TestConsoleBuilder {
    fn default() -> Self {
        Self {
            transport: MockTransport::new(),
            authenticated: false,
            settings: PanelSettings::default(),
            today: NaiveDate::from_ymd_opt(2024, 5, 15),
        }
    }
}

impl TestConsoleBuilder {
    pub fn transport(mut self, transport: MockTransport) -> Self {
        self.transport = transport;
        self
    }

    /// Start with a persisted session, as after an earlier login.
    pub fn signed_in(mut self) -> Self {
        self.authenticated = true;
        self
    }

    pub fn settings(mut self, settings: PanelSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn build(self) -> TestConsole {
        let store = MemorySessionStore::new(self.authenticated);
        let sink = MemoryExportSink::new();
        let mut console = Console::new(
            self.transport.client(),
            self.settings,
            Box::new(store.clone()),
            Box::new(sink.clone()),
        );
        if let Some(today) = self.today {
            console.set_today(today);
        }
        TestConsole {
            console,
            transport: self.transport,
            sink,
            store,
        }
    }
}
