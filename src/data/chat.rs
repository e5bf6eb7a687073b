//! Community chat feed
//!
//! Append-only ordered message log held for the lifetime of the
//! process. Seeded with fixed welcome/sample entries; not persisted.

use chrono::{Duration, Utc};
use tracing::debug;

use super::models::{ChatMessage, EntityId, SYSTEM_USER_ID, User};
use crate::error::{AppError, Result};

/// Append-only chat message log
///
/// Messages are never edited or deleted and the log is unbounded;
/// acceptable because each session only ever sees its own local log.
#[derive(Default)]
pub struct ChatFeed {
    messages: Vec<ChatMessage>,
}

impl ChatFeed {
    /// Create an empty feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a feed holding the fixed welcome/sample entries
    pub fn seeded() -> Self {
        let now = Utc::now();
        let messages = vec![
            ChatMessage {
                id: "1".to_string(),
                user_id: SYSTEM_USER_ID.to_string(),
                username: "ReadVault Bot".to_string(),
                body: "Welcome to the ReadVault community chat! Share your thoughts about \
                       books, ask for recommendations, and connect with fellow readers."
                    .to_string(),
                created_at: now,
            },
            ChatMessage {
                id: "2".to_string(),
                user_id: "2".to_string(),
                username: "BookLover123".to_string(),
                body: "Just finished \"The Art of Clean Code\" - absolutely brilliant! \
                       Anyone else read it?"
                    .to_string(),
                created_at: now - Duration::seconds(300),
            },
            ChatMessage {
                id: "3".to_string(),
                user_id: "3".to_string(),
                username: "TechReader".to_string(),
                body: "Yes! Robert Martin is a genius. His principles have really improved \
                       my coding."
                    .to_string(),
                created_at: now - Duration::seconds(250),
            },
            ChatMessage {
                id: "4".to_string(),
                user_id: "4".to_string(),
                username: "DesignEnthusiast".to_string(),
                body: "Has anyone checked out \"Digital Design Principles\"? Looking for \
                       good design books."
                    .to_string(),
                created_at: now - Duration::seconds(180),
            },
        ];

        Self { messages }
    }

    /// Append a message from a logged-in user
    ///
    /// # Errors
    /// Returns `Validation` without mutating the log when the body is
    /// blank. The "must be logged in" rule lives in the caller, which
    /// holds the session.
    pub fn post(&mut self, user: &User, body: &str) -> Result<ChatMessage> {
        let body = body.trim();
        if body.is_empty() {
            return Err(AppError::Validation(
                "chat message must not be empty".to_string(),
            ));
        }

        let message = ChatMessage {
            id: EntityId::new().0,
            user_id: user.id.clone(),
            username: user.username.clone(),
            body: body.to_string(),
            created_at: Utc::now(),
        };

        debug!(user_id = %user.id, "Chat message appended");
        self.messages.push(message.clone());
        Ok(message)
    }

    /// Full log in chronological (insertion) order
    pub fn history(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages in the log
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
