use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("Invalid API base URL: {0}")]
    BaseUrl(String),
}
