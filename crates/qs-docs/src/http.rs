//! Shared HTTP response checks for document API calls.

use crate::error::ApiError;

/// Return the response unchanged on success, otherwise
/// [`ApiError::Status`] with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
