/// Failure reported by a single GitHub API request.
///
/// Failures are handled locally by the fetch operations: a paginated fetch
/// aborts its loop and returns whatever was accumulated, an unpaginated fetch
/// returns its empty/default record. Nothing here crosses the library
/// boundary as an error value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// Response arrived with a status other than 200; carries the numeric
    /// code and the raw response text
    Status { status: u16, body: String },
    /// Transport-level failure before any response was received
    Request(String),
    /// Response body did not decode into the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { status, body } => write!(f, "Error: {} - {}", status, body),
            Self::Request(msg) => write!(f, "Request error: {}", msg),
            Self::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiFailure {}
