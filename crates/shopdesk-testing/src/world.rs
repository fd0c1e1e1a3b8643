//! Isolated environment for running the `shopdesk` binary.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp data directory plus an unreachable API base, so no test ever talks to
/// a real server.
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl TestWorld {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let data_dir = temp_dir.path().join("shopdesk");
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { temp_dir, data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        std::fs::write(self.data_dir.join("config.toml"), content)?;
        Ok(())
    }

    /// `shopdesk --data-dir <tmp> <args>` with a scrubbed environment.
    pub fn command(&self, args: &[&str]) -> Result<Command> {
        let mut cmd = Command::cargo_bin("shopdesk")?;
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .args(args)
            .env_remove("SHOPDESK_PATH")
            .env_remove("SHOPDESK_API")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let output = self.command(args)?.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}
