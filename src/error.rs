use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Malformed order record")]
    MalformedRecord,

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session backend failed: {0}")]
    Backend(String),
}
