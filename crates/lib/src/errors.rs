use thiserror::Error;

/// Errors produced by calls to upstream services.
///
/// Validation failures never reach these variants; they are raised by the
/// server before any outbound request is made.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to upstream API: {0}")]
    Request(reqwest::Error),
    #[error("Failed to deserialize upstream API response: {0}")]
    Deserialization(reqwest::Error),
    #[error("Upstream API returned an error: {0}")]
    Api(String),
    #[error("Upstream API returned no usable content")]
    EmptyResponse,
}
