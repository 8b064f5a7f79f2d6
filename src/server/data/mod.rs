//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations and are generic over
//! [`sea_orm::ConnectionTrait`] so they can run inside transactions.

pub mod accommodation;
pub mod localization;
pub mod location;
pub mod user;
