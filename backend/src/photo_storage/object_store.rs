//! Signing interface to the object store

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;

use super::StoreResult;

/// Parameters for signing a browser form upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSignRequest {
    pub bucket: String,
    pub key: String,
    /// Content type the uploader must submit
    pub content_type: String,
    pub expires_in: Duration,
}

/// Parameters for signing a read of one object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadSignRequest {
    pub bucket: String,
    pub key: String,
    pub expires_in: Duration,
}

/// Signed form upload returned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUpload {
    /// Endpoint the form is posted to
    pub url: String,
    /// Form fields the uploader must replicate exactly
    pub fields: BTreeMap<String, String>,
}

/// Object store able to sign scoped, expiring authorizations.
///
/// Implementations are shared across concurrent requests.
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    /// Signs a POST form upload restricted to one key and content type
    async fn presign_upload(&self, request: UploadSignRequest) -> StoreResult<SignedUpload>;

    /// Signs a read-only URL for one key
    async fn presign_read(&self, request: ReadSignRequest) -> StoreResult<String>;
}
