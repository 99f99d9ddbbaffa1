use serde::Deserialize;
use serde::Serialize;

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
    /// Delay applied after every transaction-detail fetch that actually
    /// hits the provider. Courtesy throttle for the free API.
    pub fetch_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: constants::DEFAULT_API_TIMEOUT_MS,
            user_agent: constants::USER_AGENT.to_string(),
            fetch_delay_ms: constants::DEFAULT_FETCH_DELAY_MS,
        }
    }
}
