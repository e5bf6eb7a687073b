//! Data layer module
//!
//! In-memory stores for the process lifetime:
//! - Book catalog (fixed, read-only after seeding)
//! - Review ledger (append-only)
//! - Chat feed (append-only, seeded)

mod catalog;
mod chat;
mod models;
mod reviews;

pub use catalog::{Catalog, seed_books};
pub use chat::ChatFeed;
pub use models::*;
pub use reviews::ReviewLedger;
