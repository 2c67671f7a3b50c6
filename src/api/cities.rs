//! City Endpoints

use gloo_net::http::Request;

use super::decode;
use crate::config::CITIES_ENDPOINT;
use crate::error::ApiError;
use crate::models::City;

pub async fn list_cities() -> Result<Vec<City>, ApiError> {
    let response = Request::get(CITIES_ENDPOINT)
        .send()
        .await
        .map_err(|source| ApiError::Network { endpoint: CITIES_ENDPOINT, source })?;
    decode(CITIES_ENDPOINT, response).await
}
