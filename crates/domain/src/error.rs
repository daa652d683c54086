use thiserror::Error;

use crate::DestinationId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown destination: {0}")]
    InvalidDestination(String),
    #[error("destination table must not be empty")]
    EmptyDestinationTable,
    #[error("destination {0} appears more than once")]
    DuplicateDestination(DestinationId),
    #[error("destination table is missing the default destination {0}")]
    MissingDefaultDestination(DestinationId),
    #[error("image must be a raster asset, got vector container {0}")]
    NonRasterAsset(String),
    #[error("unsupported image asset: {0}")]
    UnsupportedAsset(String),
    #[error("grid column count must be positive, got {0}")]
    InvalidColumnCount(usize),
}
