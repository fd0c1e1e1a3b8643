use anyhow::Result;

use shopdesk_runtime::{Credentials, View, resolve_data_dir};

use super::args::{Cli, Commands};
use super::context::HandlerContext;
use super::handlers;
use super::logging::{self, LogTarget};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui);

    let api = cli.api.as_deref();
    let load = || HandlerContext::load(data_dir.clone(), api);

    match command {
        // `config path` and `config init` must work even when the file does not parse
        Commands::Config { command } => handlers::config::handle(&data_dir, api, command),
        Commands::Tui => {
            let ctx = load()?;
            logging::init(cli.log_level, LogTarget::File(ctx.log_path()))?;
            handlers::tui::handle(&ctx)
        }
        Commands::Dump {
            view,
            format,
            user,
            password,
        } => {
            let ctx = load()?;
            logging::init(cli.log_level, LogTarget::Stderr)?;
            let credentials = match (user, password) {
                (Some(username), Some(password)) => Some(Credentials { username, password }),
                _ => None,
            };
            handlers::dump::handle(&ctx, View::from(view), format, credentials)
        }
        Commands::Login { user, password } => {
            let ctx = load()?;
            logging::init(cli.log_level, LogTarget::Stderr)?;
            handlers::session::login(
                &ctx,
                Credentials {
                    username: user,
                    password,
                },
            )
        }
        Commands::Logout => handlers::session::logout(&load()?),
    }
}
