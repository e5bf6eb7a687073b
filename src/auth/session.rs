//! Session persistence
//!
//! Exactly one record survives a restart: the current [`User`],
//! serialized as JSON at a well-known location. An absent record
//! means "no session". No expiry, no revocation.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::data::User;
use crate::error::{AppError, Result};

/// Storage seam for the session record
///
/// The identity service talks to sessions only through this trait, so
/// a real backend can later replace the local-storage analog without
/// touching callers.
pub trait SessionStore {
    /// Load the persisted session, if any
    fn load(&self) -> Result<Option<User>>;

    /// Persist the session record, replacing any previous one
    fn save(&self, user: &User) -> Result<()>;

    /// Remove the persisted session record
    fn clear(&self) -> Result<()>;
}

/// File-backed session store
///
/// The production store: one JSON file at the configured path.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| AppError::Session(format!("failed to read session file: {e}")))?;

        // A corrupt record is treated as "no session" rather than a
        // fatal error; the user just has to log in again.
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(error) => {
                warn!(%error, path = %self.path.display(), "Discarding unreadable session record");
                Ok(None)
            }
        }
    }

    fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Session(format!("failed to create session dir: {e}")))?;
        }

        let raw = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, raw)
            .map_err(|e| AppError::Session(format!("failed to write session file: {e}")))
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| AppError::Session(format!("failed to remove session file: {e}")))?;
        }
        Ok(())
    }
}

/// In-memory session store
///
/// Used by tests and by embedders that do not want session
/// persistence across restarts.
#[derive(Default)]
pub struct MemorySessionStore {
    user: RefCell<Option<User>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<User>> {
        Ok(self.user.borrow().clone())
    }

    fn save(&self, user: &User) -> Result<()> {
        *self.user.borrow_mut() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.user.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_user() -> User {
        User {
            id: "u1".to_string(),
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            is_admin: false,
            favorites: vec!["1".to_string()],
            watchlist: vec![],
            reading_history: vec![],
        }
    }

    #[test]
    fn absent_file_means_no_session() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/session.json"));

        store.save(&test_user()).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded.id, "u1");
        assert_eq!(loaded.favorites, vec!["1".to_string()]);
    }

    #[test]
    fn clear_removes_the_record() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        store.save(&test_user()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing an absent record is a no-op, not an error
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_record_is_discarded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::new(path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&test_user()).unwrap();
        assert!(store.load().unwrap().is_some());

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
