pub mod api;
pub mod server;
pub mod tracer;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use toml;

pub use api::ApiConfig;
pub use server::ServerConfig;
pub use tracer::TracerConfig;

use crate::err_with_loc;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub tracer: TracerConfig,
    pub server: ServerConfig,
}

pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let config_str = std::fs::read_to_string(path.as_ref())
        .map_err(|e| err_with_loc!(ConfigError::OpenFileError(e.to_string())))?;
    let config: Config =
        toml::from_str(&config_str).map_err(|e| err_with_loc!(ConfigError::ParseError(e.to_string())))?;
    Ok(config)
}
