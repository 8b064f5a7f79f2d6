//! Session data models.
//!
//! Type-safe wrappers around tower-sessions for the values the server keeps in a user's
//! session (Redis-backed in production, in-memory in tests).

pub mod user;
