//! The `shopdesk` binary: a terminal console and a handful of headless
//! commands over the shop admin API.
//!
//! Everything stateful lives in `shopdesk-runtime`; this crate only parses
//! arguments, wires the HTTP transport, file-backed session and export sinks,
//! and draws.

mod args;
mod commands;
mod context;
mod handlers;
mod logging;
pub mod presentation;
pub mod sink;
mod tui;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, ViewName};
pub use commands::run;
pub use context::HandlerContext;
pub use sink::FileExportSink;
