use clap::ValueEnum;
use std::fmt;

use shopdesk_runtime::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewName {
    Dashboard,
    Products,
    Orders,
    Customers,
    Sellers,
    Reports,
    Analytics,
    Returns,
    Bills,
}

impl From<ViewName> for View {
    fn from(name: ViewName) -> Self {
        match name {
            ViewName::Dashboard => View::Dashboard,
            ViewName::Products => View::Products,
            ViewName::Orders => View::Orders,
            ViewName::Customers => View::Customers,
            ViewName::Sellers => View::Sellers,
            ViewName::Reports => View::Reports,
            ViewName::Analytics => View::Analytics,
            ViewName::Returns => View::Returns,
            ViewName::Bills => View::Bills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_has_a_name() {
        let names: Vec<View> = ViewName::value_variants().iter().map(|n| View::from(*n)).collect();
        assert_eq!(names, View::ALL.to_vec());
    }
}
