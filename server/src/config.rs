//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),

    #[error("{0} must not be blank")]
    Blank(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Overrides the Leptos `site-root` that `/pkg` assets are served from.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: default from `[package.metadata.leptos]`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(v) if v.trim().is_empty() => return Err(ConfigError::Blank("HOST")),
            Some(v) => v.trim().to_owned(),
            None => DEFAULT_HOST.to_owned(),
        };
        let port = match lookup("PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(v))?,
            None => DEFAULT_PORT,
        };
        let site_root = lookup("SITE_ROOT").filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        Ok(Self { host, port, site_root })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
