//! Interactive terminal console.
//!
//! One current-thread runtime drives both the orchestrator runs and this loop:
//! each tick waits briefly for a run message, drains the rest, then handles
//! whatever keys are pending without blocking.

mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::info;

use shopdesk_runtime::Console;

use app::App;

const TICK: Duration = Duration::from_millis(50);

pub fn run(runtime: &Runtime, console: Console) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let result = runtime.block_on(async {
        let mut app = App::new(console);
        event_loop(&mut terminal, &mut app).await
    });

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("console closed");

    result
}

async fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Ok(Some(message)) = tokio::time::timeout(TICK, app.console.recv()).await {
            app.console.apply(message);
        }
        app.console.drain();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                let action = app.on_key(key);
                app.perform(action).await;
            }
        }
    }
    Ok(())
}
