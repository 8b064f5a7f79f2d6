//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, errors are converted into responses
//! the same way axum would.

mod accommodation;
mod auth;
mod localization;
mod location;
mod user;
