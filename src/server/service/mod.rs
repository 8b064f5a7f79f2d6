//! Service layer for business logic.
//!
//! Services validate submitted input, apply the ownership policy and coordinate the
//! repositories in [`crate::server::data`]. Controllers and the sitemap CLI command only talk to
//! services, never to repositories directly.

pub mod accommodation;
pub mod auth;
pub mod localization;
pub mod location;
pub mod sitemap;
pub mod user;
