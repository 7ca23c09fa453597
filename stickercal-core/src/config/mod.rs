//! stickercal configuration.
//!
//! Read from ~/.config/stickercal/config.toml, with `STICKERCAL_*` environment
//! variables layered on top (e.g. `STICKERCAL_SERVER__TOKEN`).

mod client;
mod server;

pub use client::ClientConfig;
pub use server::{ServerConfig, StoreKind};

use std::path::{Path, PathBuf};

use config::{Environment, File};
use serde::Deserialize;

use crate::error::{StickerError, StickerResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub client: ClientConfig,
}

impl Config {
    pub fn config_path() -> StickerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StickerError::Config("Could not determine config directory".into()))?
            .join("stickercal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config file
    /// there on first use.
    pub fn load() -> StickerResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
        }

        Self::load_from(&path)
    }

    /// Load from `path` (which may be missing) plus the environment.
    pub fn load_from(path: &Path) -> StickerResult<Self> {
        config::Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("STICKERCAL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| StickerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| StickerError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> StickerResult<()> {
        let server = ServerConfig::default();
        let client = ClientConfig::default();

        let contents = format!(
            "\
# stickercal configuration

[server]
# Address the server listens on:
# address = \"{}\"

# Path prefix for the /events routes:
# prefix = \"{}\"

# \"file\" or \"memory\":
# store = \"file\"
# data_file = \"{}\"

# Require this bearer token on every request:
# token = \"change-me\"

[client]
# server_url = \"{}\"
# token = \"change-me\"
",
            server.address,
            server.prefix,
            server.data_file.display(),
            client.server_url,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StickerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| StickerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
