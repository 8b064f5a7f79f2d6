//! Server-side models: application state, the acting user, database model aliases and
//! session data.

pub mod actor;
pub mod app;
pub mod db;
pub mod session;
