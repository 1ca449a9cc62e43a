//! Widget configuration.
//!
//! Values are fixed at build time so the server-rendered markup and the
//! hydrated client always agree. Each field can be overridden through a
//! `FRAME_*` environment variable present when the crate is compiled.

use std::time::Duration;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TITLE: &str = "Vibes";
pub const DEFAULT_DESCRIPTION: &str = "Create and deploy Farcaster frames with AI";
pub const DEFAULT_RUNTIME_NAME: &str = "Modal.com";
pub const DEFAULT_VERSION: &str = "v1.0.0";
pub const DEFAULT_GENERATE_DELAY_MS: u64 = 2000;
pub const DEFAULT_DEPLOY_DELAY_MS: u64 = 3000;
pub const DEFAULT_DEPLOY_URL: &str = "https://vibes-frame-12345.modal.run";

/// Errors produced while reading configuration overrides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a whole number of milliseconds, got `{value}`")]
    InvalidDelay { key: &'static str, value: String },

    #[error("{key} must be an http(s) URL, got `{value}`")]
    InvalidUrl { key: &'static str, value: String },

    #[error("{key} must not be blank")]
    Blank { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    pub title: String,
    pub description: String,
    /// Display name of the hosted runtime deployments go to.
    pub runtime_name: String,
    pub version: String,
    pub generate_delay: Duration,
    pub deploy_delay: Duration,
    pub deploy_url: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            runtime_name: DEFAULT_RUNTIME_NAME.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
            generate_delay: Duration::from_millis(DEFAULT_GENERATE_DELAY_MS),
            deploy_delay: Duration::from_millis(DEFAULT_DEPLOY_DELAY_MS),
            deploy_url: DEFAULT_DEPLOY_URL.to_owned(),
        }
    }
}

impl FrameConfig {
    /// Build config from `FRAME_*` variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is present but malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "FRAME_TITLE" => option_env!("FRAME_TITLE"),
                "FRAME_DESCRIPTION" => option_env!("FRAME_DESCRIPTION"),
                "FRAME_RUNTIME_NAME" => option_env!("FRAME_RUNTIME_NAME"),
                "FRAME_VERSION" => option_env!("FRAME_VERSION"),
                "FRAME_GENERATE_DELAY_MS" => option_env!("FRAME_GENERATE_DELAY_MS"),
                "FRAME_DEPLOY_DELAY_MS" => option_env!("FRAME_DEPLOY_DELAY_MS"),
                "FRAME_DEPLOY_URL" => option_env!("FRAME_DEPLOY_URL"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup, falling back to defaults
    /// for absent keys.
    ///
    /// Recognized keys:
    /// - `FRAME_TITLE`, `FRAME_DESCRIPTION`, `FRAME_RUNTIME_NAME`, `FRAME_VERSION`
    /// - `FRAME_GENERATE_DELAY_MS`: default 2000
    /// - `FRAME_DEPLOY_DELAY_MS`: default 3000
    /// - `FRAME_DEPLOY_URL`: default `https://vibes-frame-12345.modal.run`
    ///
    /// # Errors
    ///
    /// Returns an error if a present value is blank, a delay is not an
    /// integer, or the deploy URL is not http(s).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let text = |key: &'static str, default: String| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(v) if v.trim().is_empty() => Err(ConfigError::Blank { key }),
                Some(v) => Ok(v.trim().to_owned()),
                None => Ok(default),
            }
        };
        let delay = |key: &'static str, default: Duration| -> Result<Duration, ConfigError> {
            match lookup(key) {
                Some(v) => v
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|_| ConfigError::InvalidDelay { key, value: v }),
                None => Ok(default),
            }
        };

        let deploy_url = text("FRAME_DEPLOY_URL", defaults.deploy_url)?;
        if !(deploy_url.starts_with("https://") || deploy_url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl { key: "FRAME_DEPLOY_URL", value: deploy_url });
        }

        Ok(Self {
            title: text("FRAME_TITLE", defaults.title)?,
            description: text("FRAME_DESCRIPTION", defaults.description)?,
            runtime_name: text("FRAME_RUNTIME_NAME", defaults.runtime_name)?,
            version: text("FRAME_VERSION", defaults.version)?,
            generate_delay: delay("FRAME_GENERATE_DELAY_MS", defaults.generate_delay)?,
            deploy_delay: delay("FRAME_DEPLOY_DELAY_MS", defaults.deploy_delay)?,
            deploy_url: deploy_url.trim_end_matches('/').to_owned(),
        })
    }
}
