//! Request and response types shared by the HTTP API.

pub mod accommodation;
pub mod api;
pub mod localization;
pub mod location;
pub mod user;
