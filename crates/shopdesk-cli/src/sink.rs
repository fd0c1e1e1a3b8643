//! Export sink backed by the local filesystem.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{info, warn};

use shopdesk_runtime::{Error, ExportSink, Result};

/// Writes CSV files into an export directory and hands bill PDFs to the
/// platform opener.
pub struct FileExportSink {
    dir: PathBuf,
}

impl FileExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for FileExportSink {
    fn save_csv(&mut self, name: &str, content: &str) -> Result<String> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        std::fs::write(&path, content)?;
        info!(path = %path.display(), bytes = content.len(), "csv exported");
        Ok(path.display().to_string())
    }

    fn open_pdf(&mut self, order_id: u64, url: &str) -> Result<String> {
        let (program, args) = opener(url);
        match Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(_) => {
                info!(order_id, url, "bill handed to {}", program);
                Ok(url.to_string())
            }
            Err(e) => {
                warn!(order_id, url, error = %e, "could not launch {}", program);
                Err(Error::Export(format!("could not open {}: {}", url, e)))
            }
        }
    }
}

fn opener(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(windows) {
        ("cmd", vec!["/C".into(), "start".into(), String::new(), url.to_string()])
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}
