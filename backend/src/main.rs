use std::sync::Arc;

use agriscale_backend::{
    photo_storage::{PhotoStorage, S3ObjectStore},
    server,
    types::Environment,
};
use anyhow::Context;
use aws_sdk_s3::Client as S3Client;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production (Datadog), regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let aws_config = environment.aws_config().await;
    let credentials = aws_config
        .credentials_provider()
        .context("No AWS credentials provider available")?;

    let storage_config = environment.storage_config();
    let s3_client = S3Client::from_conf(environment.s3_client_config(&aws_config));
    let object_store = Arc::new(S3ObjectStore::new(
        s3_client,
        credentials,
        storage_config.region(),
        environment.upload_endpoint(),
    ));

    let photo_storage = Arc::new(PhotoStorage::new(object_store, storage_config));

    server::start(environment, photo_storage).await
}
