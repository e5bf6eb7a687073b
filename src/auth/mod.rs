//! Authentication module
//!
//! Mock identity service plus the session persistence seam.

mod identity;
mod session;

pub use identity::IdentityService;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
