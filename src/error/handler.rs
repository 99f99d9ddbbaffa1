use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Failed to trace transaction lineage")]
    TraceFailed,
}
