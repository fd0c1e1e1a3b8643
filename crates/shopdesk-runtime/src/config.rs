use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api/admin";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SHOPDESK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.shopdesk
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("SHOPDESK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("shopdesk"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".shopdesk"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found".to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Limits and thresholds the orchestrators put into their requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub top_customers_limit: u32,
    pub recent_orders_limit: u32,
    pub low_stock_threshold: u32,
    pub daily_sales_days: u32,
    pub lifetime_value_limit: u32,
    pub report_months: u32,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            top_customers_limit: 5,
            recent_orders_limit: 5,
            low_stock_threshold: 10,
            daily_sales_days: 30,
            lifetime_value_limit: 10,
            report_months: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub request_timeout_secs: u64,
    /// Where CSV exports land. Defaults to `<data_dir>/exports`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    pub panels: PanelSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: 15,
            export_dir: None,
            panels: PanelSettings::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// `--api` flag, then `SHOPDESK_API`, then the file value.
    pub fn apply_api_override(&mut self, flag: Option<&str>) {
        if let Some(base) = flag {
            self.api_base = base.to_string();
        } else if let Ok(base) = std::env::var("SHOPDESK_API") {
            self.api_base = base;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn export_dir_in(&self, data_dir: &Path) -> PathBuf {
        match &self.export_dir {
            Some(dir) => expand_tilde(&dir.to_string_lossy()),
            None => data_dir.join("exports"),
        }
    }
}
