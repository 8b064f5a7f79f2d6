//! Utility functions for controller request handling.
//!
//! Resolves the logged in user from the session, either as a plain account for the public
//! routes or as an [`Actor`](crate::server::model::actor::Actor) cleared for the administration
//! API.

pub mod get_user;
