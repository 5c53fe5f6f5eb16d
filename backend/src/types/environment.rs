//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};

use crate::photo_storage::{StorageConfig, UploadEndpoint};

/// Bucket used against `LocalStack` when `S3_BUCKET_NAME` is unset
const DEVELOPMENT_BUCKET_NAME: &str = "agriscale-photo-upload-local";

const DEFAULT_AWS_REGION: &str = "us-east-1";

const LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the raw photo bucket setting for the environment
    ///
    /// Production and staging have no fallback, an unset variable leaves
    /// photo grants unconfigured.
    #[must_use]
    pub fn s3_bucket(&self) -> Option<String> {
        match self {
            Self::Production | Self::Staging => env::var("S3_BUCKET_NAME").ok(),
            Self::Development => Some(
                env::var("S3_BUCKET_NAME").unwrap_or_else(|_| DEVELOPMENT_BUCKET_NAME.to_string()),
            ),
        }
    }

    /// Returns the AWS region, `us-east-1` when neither region variable is set
    #[must_use]
    pub fn aws_region(&self) -> String {
        env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .ok()
            .filter(|region| !region.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string())
    }

    /// Immutable storage configuration injected into the photo issuers
    #[must_use]
    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig::new(self.s3_bucket(), self.aws_region())
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            // Regular AWS endpoints for production and staging
            Self::Production | Self::Staging => None,
            // LocalStack endpoint for development
            Self::Development => Some(LOCALSTACK_ENDPOINT),
        }
    }

    /// Where browser form uploads are posted
    #[must_use]
    pub fn upload_endpoint(&self) -> UploadEndpoint {
        self.override_aws_endpoint_url().map_or_else(
            || UploadEndpoint::VirtualHosted {
                region: self.aws_region(),
            },
            |base_url| UploadEndpoint::PathStyle {
                base_url: base_url.to_string(),
            },
        )
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .region(Region::new(self.aws_region()))
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// AWS S3 service configuration derived from the shared AWS configuration
    #[must_use]
    pub fn s3_client_config(&self, aws_config: &aws_config::SdkConfig) -> aws_sdk_s3::Config {
        let s3_config: aws_sdk_s3::Config = aws_config.into();
        let mut builder = s3_config.to_builder();

        // Override "force path style" to true for compatibility with LocalStack
        // https://github.com/awslabs/aws-sdk-rust/discussions/874
        if matches!(self, Self::Development) {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }
}
