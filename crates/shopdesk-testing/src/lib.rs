//! Testing infrastructure for shopdesk integration tests.
//!
//! - `MockTransport`: scripted admin API with failures, delays and a call log
//! - `fixtures`: canned API bodies and route sets per view
//! - `TestConsole`: a signed-in console wired to the mock transport
//! - `TestWorld`: isolated data directory for running the binary
//! - `assertions`: canvas checks that read like the behaviour under test

pub mod assertions;
pub mod console;
pub mod fixtures;
pub mod sink;
pub mod transport;
pub mod world;

pub use console::{TestConsole, TestConsoleBuilder};
pub use sink::{ExportRecord, MemoryExportSink};
pub use transport::{MockTransport, RecordedCall, TEST_BASE};
pub use world::TestWorld;
