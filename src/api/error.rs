use thiserror::Error;

/// Errors returned by the API client.
///
/// `Request` carries the message shown to the user, server-provided when the
/// backend sent a usable `{detail}` body. `Network` is a transport failure
/// (DNS, connect, broken pipe); `Decode` is a 2xx response whose body did not
/// match the expected shape.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Request(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }

    pub(crate) fn decode(err: reqwest::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
