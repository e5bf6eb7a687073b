//! Identity service (mock authentication)
//!
//! Fabricates a [`User`] from submitted credentials instead of
//! validating against a backing store. The capability contract
//! (login/register/logout returning or clearing a session identity)
//! is real; the credential check is not.

use chrono::Utc;
use tracing::info;

use super::session::SessionStore;
use crate::data::{EntityId, ReadingProgress, User};
use crate::error::{AppError, Result};

/// Current-user identity holder
///
/// Owns the session lifecycle: restores a persisted identity on
/// construction, persists every mutation through the injected
/// [`SessionStore`], and drops both on logout.
pub struct IdentityService {
    admin_email: String,
    store: Box<dyn SessionStore>,
    current: Option<User>,
}

impl IdentityService {
    /// Create the service and restore any persisted session
    ///
    /// # Errors
    /// Returns `Session` if the store is unreadable.
    pub fn new(admin_email: String, store: Box<dyn SessionStore>) -> Result<Self> {
        let current = store.load()?;
        if let Some(user) = &current {
            info!(username = %user.username, "Restored persisted session");
        }

        Ok(Self {
            admin_email,
            store,
            current,
        })
    }

    /// The currently signed-in user, if any
    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    // =========================================================================
    // Login / register / logout
    // =========================================================================

    /// Sign in with an email address
    ///
    /// The password is accepted but never checked. The username is
    /// derived from the local part of the email, and the administrator
    /// flag is set exactly when the email matches the configured
    /// administrator address.
    ///
    /// # Errors
    /// Returns `Validation` when the email is not email-like.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<User> {
        let email = email.trim();
        let local_part = email_local_part(email)?;

        let user = User {
            id: EntityId::new().0,
            username: local_part.to_string(),
            email: email.to_string(),
            is_admin: email.eq_ignore_ascii_case(&self.admin_email),
            favorites: vec![],
            watchlist: vec![],
            reading_history: vec![],
        };

        self.store.save(&user)?;
        info!(username = %user.username, is_admin = user.is_admin, "User logged in");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Register a new account
    ///
    /// Always succeeds given a non-empty username and an email-like
    /// email; the created identity is never an administrator.
    pub fn register(&mut self, username: &str, email: &str, _password: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::Validation(
                "username must not be empty".to_string(),
            ));
        }

        let email = email.trim();
        email_local_part(email)?;

        let user = User {
            id: EntityId::new().0,
            username: username.to_string(),
            email: email.to_string(),
            is_admin: false,
            favorites: vec![],
            watchlist: vec![],
            reading_history: vec![],
        };

        self.store.save(&user)?;
        info!(username = %user.username, "User registered");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clear the current identity and its persisted record
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.current.take() {
            info!(username = %user.username, "User logged out");
        }
        self.store.clear()
    }

    // =========================================================================
    // Per-user book state
    // =========================================================================

    /// Add a book to the current user's favorites
    pub fn add_favorite(&mut self, book_id: &str) -> Result<()> {
        self.update_current(|user| {
            if !user.favorites.iter().any(|id| id == book_id) {
                user.favorites.push(book_id.to_string());
            }
        })
    }

    /// Remove a book from the current user's favorites
    pub fn remove_favorite(&mut self, book_id: &str) -> Result<()> {
        self.update_current(|user| user.favorites.retain(|id| id != book_id))
    }

    /// Add a book to the current user's watchlist
    pub fn add_to_watchlist(&mut self, book_id: &str) -> Result<()> {
        self.update_current(|user| {
            if !user.watchlist.iter().any(|id| id == book_id) {
                user.watchlist.push(book_id.to_string());
            }
        })
    }

    /// Remove a book from the current user's watchlist
    pub fn remove_from_watchlist(&mut self, book_id: &str) -> Result<()> {
        self.update_current(|user| user.watchlist.retain(|id| id != book_id))
    }

    /// Record reading progress for a book (upsert by book id)
    ///
    /// # Errors
    /// Returns `Validation` when `total_pages` is zero or
    /// `current_page` exceeds it; `Unauthorized` when nobody is
    /// signed in.
    pub fn record_progress(
        &mut self,
        book_id: &str,
        current_page: u32,
        total_pages: u32,
    ) -> Result<ReadingProgress> {
        if total_pages == 0 {
            return Err(AppError::Validation(
                "total_pages must be positive".to_string(),
            ));
        }
        if current_page > total_pages {
            return Err(AppError::Validation(format!(
                "current_page {current_page} exceeds total_pages {total_pages}"
            )));
        }

        let progress = ReadingProgress {
            book_id: book_id.to_string(),
            current_page,
            total_pages,
            last_read: Utc::now(),
            progress: f64::from(current_page) / f64::from(total_pages) * 100.0,
        };

        let record = progress.clone();
        self.update_current(move |user| {
            match user
                .reading_history
                .iter_mut()
                .find(|entry| entry.book_id == record.book_id)
            {
                Some(entry) => *entry = record,
                None => user.reading_history.push(record),
            }
        })?;

        Ok(progress)
    }

    /// Mutate the current user and persist the result
    fn update_current(&mut self, mutate: impl FnOnce(&mut User)) -> Result<()> {
        let user = self.current.as_mut().ok_or(AppError::Unauthorized)?;
        mutate(user);
        self.store.save(user)
    }
}

/// Extract the local part of an email-like string
///
/// "Email-like" here means a non-empty local part and domain around a
/// single `@`, with no whitespace. This mock never goes further.
fn email_local_part(email: &str) -> Result<&str> {
    let not_email = || AppError::Validation(format!("\"{email}\" is not an email address"));

    if email.chars().any(char::is_whitespace) {
        return Err(not_email());
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(local),
        _ => Err(not_email()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::MemorySessionStore;

    const ADMIN_EMAIL: &str = "admin@readvault.com";

    fn service() -> IdentityService {
        IdentityService::new(ADMIN_EMAIL.to_string(), Box::new(MemorySessionStore::new())).unwrap()
    }

    #[test]
    fn login_derives_username_from_local_part() {
        let mut identity = service();
        let user = identity.login("reader@example.com", "whatever").unwrap();

        assert_eq!(user.username, "reader");
        assert!(!user.is_admin);
        assert_eq!(identity.current().unwrap().email, "reader@example.com");
    }

    #[test]
    fn admin_email_sets_admin_flag() {
        let mut identity = service();
        assert!(identity.login(ADMIN_EMAIL, "x").unwrap().is_admin);
        assert!(!identity.login("x@y.com", "x").unwrap().is_admin);
    }

    #[test]
    fn malformed_emails_are_rejected() {
        let mut identity = service();
        for email in ["", "no-at-sign", "@nodomain", "nolocal@", "two words@x.com"] {
            assert!(identity.login(email, "x").is_err(), "accepted {email:?}");
        }
        assert!(identity.current().is_none());
    }

    #[test]
    fn register_never_grants_admin() {
        let mut identity = service();
        let user = identity.register("admin", ADMIN_EMAIL, "x").unwrap();
        assert!(!user.is_admin);
        assert_eq!(user.username, "admin");
    }

    #[test]
    fn register_requires_username() {
        let mut identity = service();
        assert!(identity.register("  ", "a@b.com", "x").is_err());
    }

    #[test]
    fn logout_clears_identity_and_store() {
        let mut identity = service();
        identity.login("reader@example.com", "x").unwrap();
        identity.logout().unwrap();

        assert!(identity.current().is_none());
    }

    #[test]
    fn session_survives_service_restart() {
        use std::rc::Rc;

        // Shared store standing in for the session file
        struct SharedStore(Rc<MemorySessionStore>);
        impl SessionStore for SharedStore {
            fn load(&self) -> crate::error::Result<Option<User>> {
                self.0.load()
            }
            fn save(&self, user: &User) -> crate::error::Result<()> {
                self.0.save(user)
            }
            fn clear(&self) -> crate::error::Result<()> {
                self.0.clear()
            }
        }

        let store = Rc::new(MemorySessionStore::new());

        let mut first =
            IdentityService::new(ADMIN_EMAIL.to_string(), Box::new(SharedStore(store.clone())))
                .unwrap();
        first.login("reader@example.com", "x").unwrap();

        let second =
            IdentityService::new(ADMIN_EMAIL.to_string(), Box::new(SharedStore(store))).unwrap();
        assert_eq!(second.current().unwrap().username, "reader");
    }

    #[test]
    fn favorites_and_watchlist_toggle() {
        let mut identity = service();
        identity.login("reader@example.com", "x").unwrap();

        identity.add_favorite("1").unwrap();
        identity.add_favorite("1").unwrap(); // idempotent
        identity.add_to_watchlist("2").unwrap();

        let user = identity.current().unwrap();
        assert_eq!(user.favorites, vec!["1".to_string()]);
        assert_eq!(user.watchlist, vec!["2".to_string()]);

        identity.remove_favorite("1").unwrap();
        identity.remove_from_watchlist("2").unwrap();

        let user = identity.current().unwrap();
        assert!(user.favorites.is_empty());
        assert!(user.watchlist.is_empty());
    }

    #[test]
    fn book_state_requires_login() {
        let mut identity = service();
        assert!(matches!(
            identity.add_favorite("1"),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn progress_is_upserted_per_book() {
        let mut identity = service();
        identity.login("reader@example.com", "x").unwrap();

        identity.record_progress("1", 35, 350).unwrap();
        let updated = identity.record_progress("1", 175, 350).unwrap();

        assert_eq!(updated.progress, 50.0);
        let user = identity.current().unwrap();
        assert_eq!(user.reading_history.len(), 1);
        assert_eq!(user.reading_history[0].current_page, 175);
    }

    #[test]
    fn progress_validates_page_counts() {
        let mut identity = service();
        identity.login("reader@example.com", "x").unwrap();

        assert!(identity.record_progress("1", 1, 0).is_err());
        assert!(identity.record_progress("1", 351, 350).is_err());
        assert!(identity.current().unwrap().reading_history.is_empty());
    }
}
