use neptune_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("missing asset {resource}: {reason}")]
    MissingAsset { resource: String, reason: String },
    #[error("io error: {0}")]
    Io(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApplicationError {
    pub fn missing_asset(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingAsset {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}
