//! Server-side settings.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

static DEFAULT_DATA_FILE: &str = "~/.local/share/stickercal/events.json";

fn default_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 4096))
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Which key-value backend holds the events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Memory,
    #[default]
    File,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: SocketAddr,

    /// Path prefix every route is mounted under. Empty or "/" mounts at the root.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub store: StoreKind,

    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Bearer token required on every request, if set.
    pub token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: default_address(),
            prefix: default_prefix(),
            store: StoreKind::default(),
            data_file: default_data_file(),
            token: None,
        }
    }
}

impl ServerConfig {
    /// `data_file` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned())
    }
}
