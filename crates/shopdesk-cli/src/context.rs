use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Runtime;

use shopdesk_api::{ApiClient, HttpTransport};
use shopdesk_runtime::{Config, Console, FileSessionStore};

use crate::sink::FileExportSink;

/// Resolved data directory plus the effective configuration.
pub struct HandlerContext {
    data_dir: PathBuf,
    config: Config,
}

impl HandlerContext {
    pub fn load(data_dir: PathBuf, api_override: Option<&str>) -> Result<Self> {
        let path = Config::path_in(&data_dir);
        let mut config =
            Config::load_from(&path).with_context(|| format!("Failed to load {}", path.display()))?;
        config.apply_api_override(api_override);
        Ok(Self { data_dir, config })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("shopdesk.log")
    }

    pub fn session_store(&self) -> FileSessionStore {
        FileSessionStore::in_dir(&self.data_dir)
    }

    pub fn api(&self) -> Result<ApiClient> {
        let transport = HttpTransport::new(&self.config.api_base, self.config.timeout())?;
        Ok(ApiClient::new(Arc::new(transport), &self.config.api_base))
    }

    /// A console over HTTP with the file-backed session and export sinks.
    pub fn console(&self) -> Result<Console> {
        Ok(Console::new(
            self.api()?,
            self.config.panels.clone(),
            Box::new(self.session_store()),
            Box::new(FileExportSink::new(self.config.export_dir_in(&self.data_dir))),
        ))
    }

    /// The console schedules everything on one thread.
    pub fn runtime(&self) -> Result<Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start the async runtime")
    }
}
