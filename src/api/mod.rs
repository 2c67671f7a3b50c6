//! Backend API Wrappers
//!
//! Frontend bindings to the HTTP endpoints, organized by resource.

mod ideas;
mod cities;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

// Re-export all public items
pub use ideas::*;
pub use cities::*;

/// Decode a JSON body whatever the status code; the backend reports
/// failures as JSON with 4xx/5xx statuses.
async fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        tracing::debug!("[API] {} answered {}", endpoint, response.status());
    }
    response
        .json::<T>()
        .await
        .map_err(|source| ApiError::Decode { endpoint, source })
}
