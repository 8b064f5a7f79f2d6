//! HTTP controller endpoints for the inventory API.
//!
//! Axum handlers for the landing document, signup/login and the JSON administration API over
//! locations, accommodations, localizations and pending users. Handlers resolve the session
//! user, call a service and let [`crate::server::error::Error`] choose the status code on
//! failure. Every handler is annotated for the utoipa OpenAPI document.

pub mod accommodation;
pub mod auth;
pub mod index;
pub mod localization;
pub mod location;
pub mod user;
pub mod util;
