use crate::ApiError;

pub const ENDPOINT_NOT_FOUND_MESSAGE: &str = "Endpoint not found";

/// Unknown paths and unsupported methods on known paths both answer 404.
pub async fn endpoint_not_found() -> ApiError {
    ApiError::not_found(ENDPOINT_NOT_FOUND_MESSAGE)
}
