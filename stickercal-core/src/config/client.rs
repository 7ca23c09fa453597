//! Client-side settings.

use serde::Deserialize;

fn default_server_url() -> String {
    "http://127.0.0.1:4096/api".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL including the route prefix.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Bearer token attached to every request.
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_url: default_server_url(),
            token: None,
        }
    }
}
