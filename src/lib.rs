pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod server;
pub mod tracer;
pub mod utils;

pub use error::{ApiClientError, ConfigError, HandlerError};

// Test utilities - shared by the unit, property and integration tests
pub mod test_utils {
    pub mod fixtures;
    pub mod mocks;
}

pub use error::Result;
