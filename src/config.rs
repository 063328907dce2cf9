//! # Configuration Module
//!
//! Process configuration read from the environment. A `.env` file in the
//! working directory is honoured by `main` before `Config::from_env` runs.

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_VERIFY_TOKEN: &str = "my_verify_token";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOCALE: &str = "ar";
pub const DEFAULT_GRAPH_API_BASE: &str = "https://graph.facebook.com";
pub const DEFAULT_GRAPH_API_VERSION: &str = "v18.0";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} has an invalid value `{value}`")]
    Invalid { var: &'static str, value: String },
}

/// Runtime configuration for the bot
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the messaging API
    pub whatsapp_token: String,
    /// Sender identity the outbound endpoint is scoped by
    pub phone_number_id: String,
    /// Shared secret for the webhook verification handshake
    pub verify_token: String,
    pub port: u16,
    /// UI language, `ar` or `en`
    pub locale: String,
    /// Replacement catalog; the built-in store is used when unset
    pub catalog_path: Option<PathBuf>,
    pub graph_api_base: String,
    pub graph_api_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset, like an unfilled line in `.env`
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            whatsapp_token: require("WHATSAPP_TOKEN")?,
            phone_number_id: require("PHONE_NUMBER_ID")?,
            verify_token: get("VERIFY_TOKEN").unwrap_or_else(|| DEFAULT_VERIFY_TOKEN.to_string()),
            port,
            locale: get("BOT_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            catalog_path: get("CATALOG_PATH").map(PathBuf::from),
            graph_api_base: get("GRAPH_API_BASE")
                .unwrap_or_else(|| DEFAULT_GRAPH_API_BASE.to_string()),
            graph_api_version: get("GRAPH_API_VERSION")
                .unwrap_or_else(|| DEFAULT_GRAPH_API_VERSION.to_string()),
        })
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            whatsapp_token: "TOKEN".to_string(),
            phone_number_id: "PHONE_ID".to_string(),
            verify_token: DEFAULT_VERIFY_TOKEN.to_string(),
            port: DEFAULT_PORT,
            locale: DEFAULT_LOCALE.to_string(),
            catalog_path: None,
            graph_api_base: DEFAULT_GRAPH_API_BASE.to_string(),
            graph_api_version: DEFAULT_GRAPH_API_VERSION.to_string(),
        }
    }
}
