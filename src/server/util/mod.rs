//! Utility functions shared across services.
//!
//! Slugs for the sitemap plus the form and password checks used by the services.

pub mod form;
pub mod password;
pub mod slug;
