//! Error types for photo grant issuance

use thiserror::Error;

/// Result type for grant operations
pub type GrantResult<T> = Result<T, GrantError>;

/// Result type for object store client calls
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the grant issuers
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GrantError {
    /// Required deployment setting is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Required request field is absent or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The object store rejected or failed the signing call
    #[error("Upstream storage error: {0}")]
    UpstreamStorage(String),

    /// Any other failure, detail is kept server side
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors returned by an [`ObjectStoreClient`](super::ObjectStoreClient)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store (or its SDK) refused the request
    #[error("{0}")]
    Rejected(String),

    /// Failure outside the store's own error model
    #[error("{0}")]
    Unexpected(String),
}

impl From<StoreError> for GrantError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Rejected(msg) => Self::UpstreamStorage(msg),
            StoreError::Unexpected(msg) => Self::Internal(msg),
        }
    }
}
