use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::json;

/// Build an upload grant request body
pub fn create_upload_request(file_name: &str, file_type: &str) -> serde_json::Value {
    json!({
        "file_name": file_name,
        "file_type": file_type
    })
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Asserts the standard error envelope and returns its code
pub fn error_code(body: &serde_json::Value) -> &str {
    assert!(body["allowRetry"].is_boolean());
    assert!(body["error"]["message"].is_string());
    body["error"]["code"].as_str().unwrap()
}
