//! Session gate.
//!
//! `authenticated` is the only credential state the console keeps. It is
//! restored from a [`SessionStore`] at startup and written back on login and
//! logout; the password never leaves the login call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

use shopdesk_api::ApiClient;

use crate::Result;

/// What the host should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    Login,
    Shell,
}

pub trait SessionStore: Send {
    fn load(&self) -> bool;
    fn save(&self) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Marker {
    authenticated: bool,
    since: DateTime<Utc>,
}

/// `session.json` marker in the data directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> bool {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return false;
        };
        match serde_json::from_str::<Marker>(&content) {
            Ok(marker) => marker.authenticated,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable session marker");
                false
            }
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let marker = Marker {
            authenticated: true,
            since: Utc::now(),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&marker)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    flag: Arc<AtomicBool>,
}

impl MemorySessionStore {
    pub fn new(authenticated: bool) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(authenticated)),
        }
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> bool {
        self.is_set()
    }

    fn save(&self) -> Result<()> {
        self.flag.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.flag.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failure(String),
}

pub struct Session {
    authenticated: bool,
    store: Box<dyn SessionStore>,
}

impl Session {
    pub fn restore(store: Box<dyn SessionStore>) -> Self {
        let authenticated = store.load();
        Self { authenticated, store }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Never fails past this point: every error becomes [`LoginOutcome::Failure`]
    /// and the session stays signed out.
    pub async fn login(&mut self, api: &ApiClient, credentials: &Credentials) -> LoginOutcome {
        let username = credentials.username.trim();
        if username.is_empty() {
            return LoginOutcome::Failure("Enter a username".to_string());
        }

        match api.login(username, &credentials.password).await {
            Ok(()) => {
                self.authenticated = true;
                if let Err(e) = self.store.save() {
                    warn!(error = %e, "could not persist session");
                }
                info!(username, "signed in");
                LoginOutcome::Success
            }
            Err(e) => {
                warn!(username, error = %e, "login failed");
                self.authenticated = false;
                LoginOutcome::Failure(e.user_message())
            }
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "could not clear persisted session");
        }
        info!("signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() -> Result<()> {
        let dir = TempDir::new()?;
        let store = FileSessionStore::in_dir(&dir.path().join("data"));

        assert!(!store.load());
        store.save()?;
        assert!(store.load());
        store.clear()?;
        assert!(!store.load());
        // clearing twice is fine
        store.clear()?;
        Ok(())
    }

    #[test]
    fn test_corrupt_marker_reads_as_signed_out() -> Result<()> {
        let dir = TempDir::new()?;
        let store = FileSessionStore::in_dir(dir.path());
        std::fs::write(store.path(), "{not json")?;
        assert!(!store.load());
        Ok(())
    }

    #[test]
    fn test_restore_reads_store() {
        let session = Session::restore(Box::new(MemorySessionStore::new(true)));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_store() {
        let store = MemorySessionStore::new(true);
        let mut session = Session::restore(Box::new(store.clone()));
        session.logout();
        assert!(!session.is_authenticated());
        assert!(!store.is_set());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials {
            username: "admin".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }
}
