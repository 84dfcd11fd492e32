//! Token creator sessions
//!
//! One session tracks a user's pass through the token creator: a draft
//! configuration edited field by field, and the generated source buffer
//! produced from it. Sessions are ephemeral and live behind the
//! [`SessionRepository`] seam so storage can be swapped without touching
//! the editing logic.

pub mod repository;
pub mod session;

pub use repository::{InMemorySessionRepository, SessionId, SessionRepository};
pub use session::CreatorSession;
