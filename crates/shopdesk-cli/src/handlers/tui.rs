use anyhow::{Result, bail};
use is_terminal::IsTerminal;

use crate::context::HandlerContext;
use crate::tui;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The console needs a terminal. Use `shopdesk dump <view>` for headless output");
    }
    let runtime = ctx.runtime()?;
    let console = ctx.console()?;
    tui::run(&runtime, console)
}
