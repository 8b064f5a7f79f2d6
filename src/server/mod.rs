//! Server application core modules.
//!
//! Everything behind the HTTP API and the CLI commands: configuration, persistence through
//! SeaORM repositories, the ownership policy, services and the axum controllers.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod policy;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
