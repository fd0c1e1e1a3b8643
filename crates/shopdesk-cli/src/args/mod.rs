mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shopdesk")]
#[command(about = "Terminal back-office console for the shop admin API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $SHOPDESK_PATH, then the platform data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Admin API base URL (overrides $SHOPDESK_API and config)")]
    pub api: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
