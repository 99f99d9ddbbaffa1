use serde::Deserialize;
use serde::Serialize;

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_SERVER_HOST.to_string(),
            port: constants::DEFAULT_SERVER_PORT,
        }
    }
}
