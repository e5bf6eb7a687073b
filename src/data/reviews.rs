//! Review ledger
//!
//! Append-only collection of user reviews keyed by book id.
//! Reviews are never edited or deleted.

use tracing::debug;

use super::models::{EntityId, Review};
use crate::error::{AppError, Result};

/// Append-only review collection
///
/// Validates rating range and comment content before appending.
/// The caller is responsible for only passing authenticated user
/// identities; this store does not know about sessions.
#[derive(Default)]
pub struct ReviewLedger {
    reviews: Vec<Review>,
}

impl ReviewLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new review
    ///
    /// # Arguments
    /// * `book_id` - Reviewed book
    /// * `user_id` / `username` - Author identity snapshot
    /// * `rating` - Star rating, must be 1..=5
    /// * `comment` - Review text, must be non-empty after trimming
    ///
    /// # Errors
    /// Returns `Validation` without mutating the ledger when the rating
    /// is out of range or the comment is blank.
    pub fn add(
        &mut self,
        book_id: &str,
        user_id: &str,
        username: &str,
        rating: u8,
        comment: &str,
    ) -> Result<Review> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::Validation(format!(
                "rating must be between 1 and 5, got {rating}"
            )));
        }

        let comment = comment.trim();
        if comment.is_empty() {
            return Err(AppError::Validation(
                "review comment must not be empty".to_string(),
            ));
        }

        let review = Review {
            id: EntityId::new().0,
            book_id: book_id.to_string(),
            user_id: user_id.to_string(),
            username: username.to_string(),
            rating,
            comment: comment.to_string(),
            created_at: chrono::Utc::now(),
        };

        debug!(book_id, user_id, rating, "Review appended");
        self.reviews.push(review.clone());
        Ok(review)
    }

    /// All reviews for one book, in insertion order (oldest first)
    pub fn for_book(&self, book_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|review| review.book_id == book_id)
            .collect()
    }

    /// Total number of reviews across all books
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the ledger holds no reviews
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_and_returns_review() {
        let mut ledger = ReviewLedger::new();
        let review = ledger
            .add("1", "u1", "booklover", 5, "Brilliant read.")
            .unwrap();

        assert_eq!(review.book_id, "1");
        assert_eq!(review.username, "booklover");
        assert_eq!(review.rating, 5);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn rating_boundaries() {
        let mut ledger = ReviewLedger::new();

        assert!(ledger.add("1", "u1", "a", 0, "too low").is_err());
        assert!(ledger.add("1", "u1", "a", 6, "too high").is_err());
        assert_eq!(ledger.len(), 0);

        assert!(ledger.add("1", "u1", "a", 1, "lowest valid").is_ok());
        assert!(ledger.add("1", "u1", "a", 5, "highest valid").is_ok());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn blank_comment_is_rejected_without_mutation() {
        let mut ledger = ReviewLedger::new();

        assert!(ledger.add("1", "u1", "a", 3, "   ").is_err());
        assert!(ledger.add("1", "u1", "a", 3, "").is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn comment_is_trimmed_on_append() {
        let mut ledger = ReviewLedger::new();
        let review = ledger.add("1", "u1", "a", 4, "  solid  ").unwrap();
        assert_eq!(review.comment, "solid");
    }

    #[test]
    fn for_book_returns_insertion_order() {
        let mut ledger = ReviewLedger::new();
        ledger.add("1", "u1", "a", 4, "first").unwrap();
        ledger.add("2", "u2", "b", 5, "other book").unwrap();
        ledger.add("1", "u3", "c", 2, "second").unwrap();

        let reviews = ledger.for_book("1");
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].comment, "first");
        assert_eq!(reviews[1].comment, "second");
    }

    #[test]
    fn fresh_ids_are_unique() {
        let mut ledger = ReviewLedger::new();
        let a = ledger.add("1", "u1", "a", 4, "one").unwrap();
        let b = ledger.add("1", "u1", "a", 4, "two").unwrap();
        assert_ne!(a.id, b.id);
    }
}
