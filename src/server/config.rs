use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
static DEFAULT_SITEMAP_PATH: &str = "sitemap.json";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: SocketAddr,
    pub sitemap_path: PathBuf,
}

impl Config {
    /// Reads the server configuration from environment variables
    ///
    /// `DATABASE_URL` and `VALKEY_URL` are required, `BIND_ADDRESS` and `SITEMAP_PATH` fall back
    /// to `0.0.0.0:8080` and `sitemap.json` respectively.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = optional_var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_address,
            sitemap_path: sitemap_path_from_env(),
        })
    }
}

/// Output path of the sitemap job, `SITEMAP_PATH` or `sitemap.json` in the working directory
pub fn sitemap_path_from_env() -> PathBuf {
    optional_var("SITEMAP_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SITEMAP_PATH))
}

/// Reads a variable that must be present and non-empty
pub fn required_var(var: &str) -> Result<String, ConfigError> {
    optional_var(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.is_empty())
}
