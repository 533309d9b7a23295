pub mod download;
pub mod endpoint;
pub mod gallery;
pub mod model;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid url")]
    InvalidUrl,
    #[error("no response from server")]
    NoResponse,
    #[error("unexpected status code {0}")]
    StatusCode(u16),
    #[error("request failed: {0}")]
    Failure(String),
    #[error("superseded by a newer gallery request")]
    Superseded,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::StatusCode(status.as_u16()),
            None if err.is_builder() => FetchError::InvalidUrl,
            None if err.is_connect() || err.is_timeout() => FetchError::Failure(err.to_string()),
            // The connection was up but the exchange ended before any response arrived.
            None if err.is_request() => FetchError::NoResponse,
            None => FetchError::Failure(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Failure(err.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(_: url::ParseError) -> Self {
        FetchError::InvalidUrl
    }
}

/// Reads the body of a `200 OK` response, any other status is an error.
pub(crate) async fn ok_body(response: reqwest::Response) -> Result<bytes::Bytes, FetchError> {
    match response.status() {
        reqwest::StatusCode::OK => Ok(response.bytes().await?),
        status => Err(FetchError::StatusCode(status.as_u16())),
    }
}
