pub mod config;
pub mod dump;
pub mod session;
pub mod tui;
