//! Temporary upload and view grants for photos kept in object storage
mod config;
mod error;
mod object_key;
mod object_store;
pub mod post_policy;
mod s3;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

pub use config::{StorageConfig, PLACEHOLDER_BUCKET_NAME};
pub use error::{GrantError, GrantResult, StoreError, StoreResult};
pub use object_key::{file_extension, generate_object_key, SUPERVISOR_PHOTO_PREFIX};
pub use object_store::{ObjectStoreClient, ReadSignRequest, SignedUpload, UploadSignRequest};
pub use s3::{S3ObjectStore, UploadEndpoint};

/// Lifetime of an upload grant, consumed once by an open form submission
pub const UPLOAD_GRANT_TTL: Duration = Duration::from_secs(600);

/// Lifetime of a view grant, which may back a page element re-rendered later
pub const VIEW_GRANT_TTL: Duration = Duration::from_secs(3600);

/// Client-declared file to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadGrantRequest {
    pub file_name: String,
    /// MIME type the store will require on upload
    pub file_type: String,
}

/// Authorization to write one object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadGrant {
    pub upload_url: String,
    pub file_key: String,
    pub fields: BTreeMap<String, String>,
}

/// Issues upload and view grants for supervisor photos
pub struct PhotoStorage {
    store: Arc<dyn ObjectStoreClient>,
    config: StorageConfig,
}

impl PhotoStorage {
    /// Creates the issuers
    ///
    /// # Arguments
    ///
    /// * `store` - Object store client that signs the grants
    /// * `config` - Bucket and region, fixed for the process lifetime
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStoreClient>, config: StorageConfig) -> Self {
        if !config.is_configured() {
            warn!("Photo bucket is not configured, photo grants will be refused");
        }

        Self { store, config }
    }

    fn bucket(&self) -> GrantResult<&str> {
        self.config.bucket().ok_or_else(|| {
            GrantError::Configuration("S3 bucket name not configured".to_string())
        })
    }

    /// Issues a grant to upload one photo under a freshly generated key
    ///
    /// # Errors
    ///
    /// Returns `GrantError::Configuration` if no bucket is configured
    /// Returns `GrantError::UpstreamStorage` if the store refuses to sign
    /// Returns `GrantError::Internal` for any other signing failure
    pub async fn issue_upload_grant(&self, request: &UploadGrantRequest) -> GrantResult<UploadGrant> {
        let bucket = self.bucket()?;
        let file_key = generate_object_key(SUPERVISOR_PHOTO_PREFIX, &request.file_name);

        debug!("Issuing upload grant for object: {}", file_key);

        let signed = self
            .store
            .presign_upload(UploadSignRequest {
                bucket: bucket.to_string(),
                key: file_key.clone(),
                content_type: request.file_type.clone(),
                expires_in: UPLOAD_GRANT_TTL,
            })
            .await
            .map_err(|e| {
                error!("Failed to sign upload for {}: {}", file_key, e);
                GrantError::from(e)
            })?;

        Ok(UploadGrant {
            upload_url: signed.url,
            file_key,
            fields: signed.fields,
        })
    }

    /// Issues a read-only URL for an existing photo
    ///
    /// # Errors
    ///
    /// Returns `GrantError::InvalidArgument` if `file_key` is empty
    /// Returns `GrantError::Configuration` if no bucket is configured
    /// Returns `GrantError::UpstreamStorage` if the store refuses to sign
    /// Returns `GrantError::Internal` for any other signing failure
    pub async fn issue_view_grant(&self, file_key: &str) -> GrantResult<String> {
        if file_key.is_empty() {
            return Err(GrantError::InvalidArgument(
                "file_key parameter is required".to_string(),
            ));
        }
        let bucket = self.bucket()?;

        debug!("Issuing view grant for object: {}", file_key);

        self.store
            .presign_read(ReadSignRequest {
                bucket: bucket.to_string(),
                key: file_key.to_string(),
                expires_in: VIEW_GRANT_TTL,
            })
            .await
            .map_err(|e| {
                error!("Failed to sign read for {}: {}", file_key, e);
                GrantError::from(e)
            })
    }
}
