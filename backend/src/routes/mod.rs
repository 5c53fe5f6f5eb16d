mod docs;
mod health;
pub mod photos;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route("/s3/generate-upload-url", post(photos::generate_upload_url))
        .api_route("/s3/get-photo-url", get(photos::get_photo_url))
}
