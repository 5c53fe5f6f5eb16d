//! Custom extractors for request validation

use aide::operation::OperationInput;
use aide::OperationOutput;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use schemars::JsonSchema;
use validator::Validate;

use crate::types::error::AppError;

/// Custom JSON extractor that validates the payload
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate + JsonSchema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First extract JSON
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| match err {
                JsonRejection::MissingJsonContentType(_) => AppError::bad_request(
                    "invalid_content_type",
                    "Missing Content-Type: application/json header",
                ),
                _ => AppError::bad_request("invalid_json", "Invalid JSON payload"),
            })?;

        // Then validate
        payload.validate().map_err(|errors| {
            // Report the first field that failed, using its custom message when present
            let first = errors
                .field_errors()
                .into_iter()
                .find_map(|(field, field_errors)| {
                    field_errors.first().map(|error| {
                        error.message.as_ref().map_or_else(
                            || format!("Invalid value for {field}"),
                            ToString::to_string,
                        )
                    })
                });

            AppError::bad_request(
                "validation_error",
                first.unwrap_or_else(|| "Request validation failed".to_string()),
            )
        })?;

        Ok(Self(payload))
    }
}

impl<T> OperationInput for ValidatedJson<T>
where
    T: JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        // Delegate to Json<T>'s implementation since ValidatedJson has the same structure
        Json::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        // Document validation error responses
        AppError::inferred_responses(ctx, operation)
    }
}
