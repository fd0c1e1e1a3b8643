use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;

use shopdesk_runtime::{Credentials, Intent, LoginOutcome, View};

use crate::args::OutputFormat;
use crate::context::HandlerContext;
use crate::presentation::{Snapshot, render_plain};

/// Sign in when needed, run `view` once to completion and print its canvas.
pub fn handle(
    ctx: &HandlerContext,
    view: View,
    format: OutputFormat,
    credentials: Option<Credentials>,
) -> Result<()> {
    let runtime = ctx.runtime()?;
    let mut console = ctx.console()?;

    let snapshot = runtime.block_on(async {
        if !console.is_authenticated() {
            let credentials = credentials
                .context("Not signed in. Run `shopdesk login` first or pass --user and --password")?;
            if let LoginOutcome::Failure(reason) = console.login(&credentials).await {
                bail!("Login failed: {}", reason);
            }
        }
        console.dispatch(Intent::Navigate(view)).await;
        console.settle().await;
        Ok::<_, anyhow::Error>(Snapshot::of(&console))
    })?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Plain => print!("{}", render_plain(&snapshot, use_color())),
    }
    Ok(())
}

fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
