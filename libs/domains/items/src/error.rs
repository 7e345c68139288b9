use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Item not found: {0}")]
    NotFound(ObjectId),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::InvalidIdentifier(_) => {
                AppError::InvalidIdentifier("Invalid ID format".to_string())
            }
            ItemError::MalformedPayload(msg) => AppError::InvalidJson(msg),
            ItemError::NotFound(_) => AppError::NotFound("Item not found".to_string()),
            ItemError::StorageUnavailable(detail) => {
                // Driver messages can carry hosts and credentials; keep them in logs only.
                tracing::error!(error = %detail, "Item storage call failed");
                AppError::ServiceUnavailable("Item storage is unavailable".to_string())
            }
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::StorageUnavailable(err.to_string())
    }
}
