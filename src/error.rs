//! Error Types

use thiserror::Error;

/// Failures talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: &'static str,
        #[source]
        source: gloo_net::Error,
    },
    /// The response body was not the JSON we expected
    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: gloo_net::Error,
    },
    #[error("could not encode request body: {0}")]
    Serialize(#[source] gloo_net::Error),
}

/// Client-side form validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Пожалуйста, заполните все обязательные поля")]
    MissingFields(Vec<&'static str>),
}
