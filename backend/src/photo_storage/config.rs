//! Immutable storage configuration injected into the issuers

/// Bucket name shipped in the legacy config template, never a real bucket
pub const PLACEHOLDER_BUCKET_NAME: &str = "YOUR_UNIQUE_S3_BUCKET_NAME";

/// Bucket and region used for photo grants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    bucket: Option<String>,
    region: String,
}

impl StorageConfig {
    /// Builds the configuration from raw settings.
    ///
    /// A missing, blank or placeholder bucket name leaves the bucket unconfigured.
    #[must_use]
    pub fn new(bucket: Option<String>, region: impl Into<String>) -> Self {
        let bucket = bucket
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty() && name != PLACEHOLDER_BUCKET_NAME);

        Self {
            bucket,
            region: region.into(),
        }
    }

    /// The configured bucket, if any
    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Whether a usable bucket is configured
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.bucket.is_some()
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }
}
