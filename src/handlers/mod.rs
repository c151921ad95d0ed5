// Route handlers, one module per resource
pub mod health;
pub mod root;
pub mod status;

use crate::error::ApiError;

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}
