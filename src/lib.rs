//! Accommodation inventory backend.
//!
//! Hierarchical locations, accommodation listings with per-language localizations, owner
//! accounts that wait for approval, and a job exporting the location hierarchy as a sitemap.

pub mod model;
pub mod server;
