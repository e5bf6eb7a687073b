//! Data models
//!
//! Rust structs representing catalog entries, reviews, users, and
//! chat messages. Generated IDs use ULID and timestamps use chrono.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Reserved author id for system-generated chat messages
pub const SYSTEM_USER_ID: &str = "system";

// =============================================================================
// ID Types
// =============================================================================

/// Entity ID wrapper (ULID format, 26 characters)
///
/// Example: "01ARZ3NDEKTSV4RRFFQ69G5FAV"
///
/// Seed catalog entries keep their short stable ids ("1".."6");
/// everything created at runtime gets a fresh ULID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Generate a new ULID
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    /// Create from existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Book
// =============================================================================

/// One catalog entry
///
/// Immutable after seeding: the catalog is fixed for the process
/// lifetime and books are never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    /// Cover image locator
    pub cover_url: String,
    /// Book content locator (PDF)
    pub content_url: String,
    /// Single category tag from an open string set
    pub category: String,
    pub tags: Vec<String>,
    pub published_date: NaiveDate,
    /// Page count, always positive
    pub pages: u32,
    /// Average rating, 0.0 to 5.0
    pub rating: f64,
    pub total_ratings: u64,
    pub downloads: u64,
    pub language: String,
    /// Display string, e.g. "12.5 MB"
    pub file_size: String,
}

// =============================================================================
// Review
// =============================================================================

/// A user review of one book
///
/// The author's id and display name are captured at submission time
/// and never re-resolved. Reviews are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub book_id: String,
    pub user_id: String,
    /// Display name snapshot taken when the review was submitted
    pub username: String,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// User
// =============================================================================

/// The session identity of the current user
///
/// Fabricated on login/registration (no backing store), serialized to
/// the session file for reuse across restarts, destroyed on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// True exactly when the email matched the configured
    /// administrator address at creation time
    pub is_admin: bool,
    /// Favorite book ids
    #[serde(default)]
    pub favorites: Vec<String>,
    /// Watchlist book ids
    #[serde(default)]
    pub watchlist: Vec<String>,
    /// Per-book reading progress records
    #[serde(default)]
    pub reading_history: Vec<ReadingProgress>,
}

/// Reading progress for one book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingProgress {
    pub book_id: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub last_read: DateTime<Utc>,
    /// Completion percentage, 0.0 to 100.0
    pub progress: f64,
}

// =============================================================================
// Chat
// =============================================================================

/// One community chat post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    /// Author id, or [`SYSTEM_USER_ID`] for seeded system entries
    pub user_id: String,
    pub username: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Whether this message was posted by the system author
    pub fn is_system(&self) -> bool {
        self.user_id == SYSTEM_USER_ID
    }
}
