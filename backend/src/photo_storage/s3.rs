//! Amazon S3 implementation of [`ObjectStoreClient`]

use std::fmt::Debug;

use async_trait::async_trait;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_s3::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    presigning::PresigningConfig,
    Client as S3Client,
};
use chrono::Utc;
use tracing::{debug, error};

use super::{
    post_policy::{sign_post_policy, PostPolicy, SigningCredentials},
    ObjectStoreClient, ReadSignRequest, SignedUpload, StoreError, StoreResult, UploadSignRequest,
};

/// Where browser form uploads are posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEndpoint {
    /// `https://<bucket>.s3.<region>.amazonaws.com/`
    VirtualHosted {
        /// Bucket region
        region: String,
    },
    /// `<base_url>/<bucket>/`, used with endpoint overrides such as `LocalStack`
    PathStyle {
        /// Endpoint root without the bucket
        base_url: String,
    },
}

impl UploadEndpoint {
    /// Form action URL for `bucket`
    #[must_use]
    pub fn url_for(&self, bucket: &str) -> String {
        match self {
            Self::VirtualHosted { region } => format!("https://{bucket}.s3.{region}.amazonaws.com/"),
            Self::PathStyle { base_url } => {
                format!("{}/{bucket}/", base_url.trim_end_matches('/'))
            }
        }
    }
}

/// S3 signer holding the long-lived service credentials
pub struct S3ObjectStore {
    client: S3Client,
    credentials: SharedCredentialsProvider,
    region: String,
    upload_endpoint: UploadEndpoint,
}

impl S3ObjectStore {
    /// Creates a new S3 object store client
    ///
    /// # Arguments
    ///
    /// * `client` - Pre-configured S3 client, used for presigned reads
    /// * `credentials` - Provider used to sign upload policies
    /// * `region` - Region the upload policy is scoped to
    /// * `upload_endpoint` - Addressing style for form uploads
    #[must_use]
    pub fn new(
        client: S3Client,
        credentials: SharedCredentialsProvider,
        region: impl Into<String>,
        upload_endpoint: UploadEndpoint,
    ) -> Self {
        Self {
            client,
            credentials,
            region: region.into(),
            upload_endpoint,
        }
    }
}

#[async_trait]
impl ObjectStoreClient for S3ObjectStore {
    async fn presign_upload(&self, request: UploadSignRequest) -> StoreResult<SignedUpload> {
        debug!(
            "Signing upload policy for object: {} with content type: {}",
            request.key, request.content_type
        );

        let credentials = self.credentials.provide_credentials().await.map_err(|e| {
            error!("Failed to load signing credentials: {}", DisplayErrorContext(&e));
            StoreError::Unexpected(format!("Failed to load signing credentials: {e}"))
        })?;

        let policy = PostPolicy {
            bucket: &request.bucket,
            key: &request.key,
            content_type: &request.content_type,
            region: &self.region,
            expires_in: request.expires_in,
        };
        let signing_credentials = SigningCredentials {
            access_key_id: credentials.access_key_id(),
            secret_access_key: credentials.secret_access_key(),
            session_token: credentials.session_token(),
        };

        let fields = sign_post_policy(&policy, &signing_credentials, Utc::now())
            .map_err(|e| StoreError::Unexpected(format!("Failed to sign upload policy: {e}")))?;

        Ok(SignedUpload {
            url: self.upload_endpoint.url_for(&request.bucket),
            fields,
        })
    }

    async fn presign_read(&self, request: ReadSignRequest) -> StoreResult<String> {
        debug!("Generating presigned GET URL for object: {}", request.key);

        let presigned_config = PresigningConfig::expires_in(request.expires_in).map_err(|e| {
            StoreError::Unexpected(format!("Failed to create presigning config: {e}"))
        })?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(&request.bucket)
            .key(&request.key)
            .presigned(presigned_config)
            .await
            .map_err(store_error)?;

        Ok(presigned_request.uri().to_string())
    }
}

/// Maps SDK failures: anything the SDK reports about the request is relayed,
/// failures to even build the request are not.
fn store_error<E, R>(error: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: Debug,
{
    match &error {
        SdkError::ServiceError(service_err) => StoreError::Rejected(
            service_err
                .err()
                .message()
                .unwrap_or("AWS S3 Client Error")
                .to_string(),
        ),
        SdkError::ConstructionFailure(_) => {
            StoreError::Unexpected(DisplayErrorContext(&error).to_string())
        }
        _ => StoreError::Rejected(DisplayErrorContext(&error).to_string()),
    }
}
