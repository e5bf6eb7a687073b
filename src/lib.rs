//! ReadVault - core library for a digital book browsing application
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │               Presentation (out of scope)                    │
//! │  - Library / book detail / chat pages                       │
//! │  - Dispatches user actions, renders store state             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    AppState facade                           │
//! │  - search / reviews / auth / chat operations                │
//! │  - Enforces "must be signed in" rules                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Stores                                 │
//! │  - Catalog (fixed, read-only)                               │
//! │  - Review ledger / chat feed (append-only)                  │
//! │  - Identity service + session file                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs synchronously on the caller's thread: operations
//! are discrete local mutations with no I/O beyond the session file.
//!
//! # Modules
//!
//! - `search`: filter and sort pipeline over the catalog
//! - `data`: models and in-memory stores
//! - `auth`: mock identity service and session persistence
//! - `config`: configuration management
//! - `logging`: tracing subscriber setup
//! - `error`: error types

pub mod auth;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod search;

use data::{Book, ChatMessage, Review, ReviewLedger, User};
use error::{AppError, Result};
use search::QueryConfig;

/// Application state
///
/// Owns every store and exposes the library's external interface.
/// Explicitly constructed and passed by reference; there are no
/// hidden process-wide statics.
pub struct AppState {
    /// Application configuration
    pub config: config::AppConfig,

    /// Fixed book catalog
    pub catalog: data::Catalog,

    /// Append-only review ledger
    pub reviews: ReviewLedger,

    /// Append-only chat feed
    pub chat: data::ChatFeed,

    /// Current-user identity and session persistence
    pub identity: auth::IdentityService,
}

impl AppState {
    /// Initialize application state
    ///
    /// Seeds the catalog, seeds the chat feed when configured to, and
    /// restores any persisted session from the configured file.
    ///
    /// # Errors
    /// Returns error if the session file exists but cannot be read.
    pub fn new(config: config::AppConfig) -> Result<Self> {
        let store = auth::FileSessionStore::new(config.session.path.clone());
        Self::with_session_store(config, Box::new(store))
    }

    /// Initialize application state with an explicit session store
    ///
    /// Tests use this with [`auth::MemorySessionStore`] to avoid
    /// touching the filesystem.
    pub fn with_session_store(
        config: config::AppConfig,
        store: Box<dyn auth::SessionStore>,
    ) -> Result<Self> {
        tracing::info!(instance = %config.instance.name, "Initializing application state");

        let catalog = data::Catalog::with_seed();
        let chat = if config.chat.seed {
            data::ChatFeed::seeded()
        } else {
            data::ChatFeed::new()
        };
        let identity = auth::IdentityService::new(config.instance.admin_email.clone(), store)?;

        Ok(Self {
            config,
            catalog,
            reviews: ReviewLedger::new(),
            chat,
            identity,
        })
    }

    // =========================================================================
    // Catalog and search
    // =========================================================================

    /// Search the catalog
    ///
    /// Returns the matching books in the order requested by `config`.
    pub fn search(&self, query: &str, config: &QueryConfig) -> Vec<&Book> {
        search::search(self.catalog.all(), query, config)
    }

    /// Look up one book; `None` renders as the "not found" view
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.catalog.get(id)
    }

    /// Books in one category, unsorted
    pub fn books_by_category(&self, category: &str) -> Vec<&Book> {
        self.catalog.by_category(category)
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Submit a review for a book as the current user
    ///
    /// # Errors
    /// - `Unauthorized` when nobody is signed in
    /// - `NotFound` when the book id is unknown
    /// - `Validation` for a bad rating or blank comment
    pub fn add_review(&mut self, book_id: &str, rating: u8, comment: &str) -> Result<Review> {
        let user = self.identity.current().ok_or(AppError::Unauthorized)?;
        if self.catalog.get(book_id).is_none() {
            return Err(AppError::NotFound);
        }

        self.reviews
            .add(book_id, &user.id, &user.username, rating, comment)
    }

    /// All reviews for one book, oldest first
    pub fn reviews_for_book(&self, book_id: &str) -> Vec<&Review> {
        self.reviews.for_book(book_id)
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Sign in (mock: the password is never checked)
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        self.identity.login(email, password)
    }

    /// Register a new account (mock: always succeeds for valid input)
    pub fn register(&mut self, username: &str, email: &str, password: &str) -> Result<User> {
        self.identity.register(username, email, password)
    }

    /// Sign out and drop the persisted session
    pub fn logout(&mut self) -> Result<()> {
        self.identity.logout()
    }

    /// The currently signed-in user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.identity.current()
    }

    /// Toggle a catalog book on the current user's favorites
    pub fn add_favorite(&mut self, book_id: &str) -> Result<()> {
        if self.catalog.get(book_id).is_none() {
            return Err(AppError::NotFound);
        }
        self.identity.add_favorite(book_id)
    }

    /// Remove a book from the current user's favorites
    pub fn remove_favorite(&mut self, book_id: &str) -> Result<()> {
        self.identity.remove_favorite(book_id)
    }

    /// Add a catalog book to the current user's watchlist
    pub fn add_to_watchlist(&mut self, book_id: &str) -> Result<()> {
        if self.catalog.get(book_id).is_none() {
            return Err(AppError::NotFound);
        }
        self.identity.add_to_watchlist(book_id)
    }

    /// Remove a book from the current user's watchlist
    pub fn remove_from_watchlist(&mut self, book_id: &str) -> Result<()> {
        self.identity.remove_from_watchlist(book_id)
    }

    /// Record reading progress for a catalog book
    pub fn record_progress(
        &mut self,
        book_id: &str,
        current_page: u32,
        total_pages: u32,
    ) -> Result<data::ReadingProgress> {
        if self.catalog.get(book_id).is_none() {
            return Err(AppError::NotFound);
        }
        self.identity.record_progress(book_id, current_page, total_pages)
    }

    // =========================================================================
    // Chat
    // =========================================================================

    /// Post a chat message as the current user
    ///
    /// # Errors
    /// - `Unauthorized` when nobody is signed in
    /// - `Validation` for a blank body
    pub fn post_message(&mut self, body: &str) -> Result<ChatMessage> {
        let user = self.identity.current().ok_or(AppError::Unauthorized)?;
        self.chat.post(user, body)
    }

    /// Full chat log in chronological order
    pub fn chat_history(&self) -> &[ChatMessage] {
        self.chat.history()
    }
}
