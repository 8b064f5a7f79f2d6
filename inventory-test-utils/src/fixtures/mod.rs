//! Test fixture modules for database record creation.
//!
//! Each submodule provides fixtures that insert records through the [`TestContext`](crate::TestContext)
//! database plus pure factory functions for in-memory models:
//!
//! - `location` - Location hierarchy records
//! - `accommodation` - Accommodations and their localizations
//! - `user` - User accounts, groups and memberships

pub mod accommodation;
pub mod location;
pub mod user;
