use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::Query, Extension, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{
    photo_storage::{PhotoStorage, UploadGrantRequest},
    types::{AppError, ValidatedJson},
};

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct UploadRequest {
    /// The original name of the file, only its extension is kept
    #[validate(length(min = 1, message = "file_name must not be empty"))]
    pub file_name: String,
    /// The MIME type of the file (e.g. image/jpeg)
    #[validate(length(min = 1, message = "file_type must not be empty"))]
    pub file_type: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UploadResponse {
    /// Endpoint the upload form is posted to
    pub upload_url: String,
    /// Object key of the photo, stored as the supervisor's `photo_url`
    pub file_key: String,
    /// Form fields to submit alongside the file, unchanged
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PhotoUrlQuery {
    /// Object key returned by the upload grant
    #[serde(default)]
    pub file_key: String,
}

/// Generates a temporary form upload for one supervisor photo
///
/// The client posts the file straight to S3 with the returned fields; the
/// grant expires after 10 minutes and only accepts the declared content type.
///
/// # Errors
///
/// - `400 BAD_REQUEST` - Missing or empty `file_name`/`file_type`
/// - `500 INTERNAL_SERVER_ERROR` - Bucket not configured, or S3 refused to sign
#[instrument(skip(photo_storage, payload))]
pub async fn generate_upload_url(
    Extension(photo_storage): Extension<Arc<PhotoStorage>>,
    ValidatedJson(payload): ValidatedJson<UploadRequest>,
) -> Result<Json<UploadResponse>, AppError> {
    let grant = photo_storage
        .issue_upload_grant(&UploadGrantRequest {
            file_name: payload.file_name,
            file_type: payload.file_type,
        })
        .await?;

    tracing::info!("Issued upload grant for {}", grant.file_key);

    Ok(Json(UploadResponse {
        upload_url: grant.upload_url,
        file_key: grant.file_key,
        fields: grant.fields,
    }))
}

/// Generates a temporary URL to view a private photo
///
/// The URL is valid for one hour and grants read access to that object only.
///
/// # Errors
///
/// - `400 BAD_REQUEST` - Missing or empty `file_key`
/// - `500 INTERNAL_SERVER_ERROR` - Bucket not configured, or S3 refused to sign
#[instrument(skip(photo_storage))]
pub async fn get_photo_url(
    Extension(photo_storage): Extension<Arc<PhotoStorage>>,
    Query(query): Query<PhotoUrlQuery>,
) -> Result<Json<String>, AppError> {
    let url = photo_storage.issue_view_grant(&query.file_key).await?;

    Ok(Json(url))
}
