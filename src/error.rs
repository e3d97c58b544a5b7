/// Error taxonomy shared by every stage of the generator.
///
/// A missing `data` field in the fixtures response is not an error; the
/// API client reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Connection failure or non-success HTTP status
    #[error("network error: {0}")]
    Network(String),

    /// Response body is not a decodable image
    #[error("decode error: {0}")]
    Decode(String),

    /// Local template or font file missing or unreadable
    #[error("asset error: {0}")]
    Asset(String),

    /// Fixtures response is not JSON or lacks a required field
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode error: {0}")]
    Encode(String),
}

impl From<reqwest::Error> for GenError {
    fn from(error: reqwest::Error) -> Self {
        GenError::Network(error.to_string())
    }
}

pub type GenResult<T> = Result<T, GenError>;
