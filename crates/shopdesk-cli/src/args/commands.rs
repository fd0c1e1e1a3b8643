use super::enums::{OutputFormat, ViewName};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive console (default)")]
    Tui,

    #[command(about = "Load one view and print what it renders")]
    Dump {
        view: ViewName,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        #[arg(long, requires = "password", help = "Sign in first when no session is stored")]
        user: Option<String>,

        #[arg(long, requires = "user")]
        password: Option<String>,
    },

    #[command(about = "Sign in and store the session")]
    Login {
        #[arg(long)]
        user: String,

        #[arg(long)]
        password: String,
    },

    #[command(about = "Forget the stored session")]
    Logout,

    #[command(about = "Inspect or write the configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration as TOML")]
    Show,

    #[command(about = "Print the configuration file path")]
    Path,

    #[command(about = "Write a configuration file with default values")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
