use thiserror::Error;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format. Please check your input.";
pub const NO_VALID_COORDINATES_MESSAGE: &str = "No valid coordinates found in the provided JSON.";
pub const UNKNOWN_SERVER_ERROR_MESSAGE: &str = "An unknown error occurred on the server.";
pub const MISSING_SERVER_MESSAGE: &str = "Failed to submit points.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Server,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{}", INVALID_JSON_MESSAGE)]
    InvalidInput,
    #[error("{}", NO_VALID_COORDINATES_MESSAGE)]
    NoValidCoordinates,
    #[error("{0}")]
    Network(String),
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },
    #[error("Malformed server response: {0}")]
    MalformedResponse(String),
}

impl SubmissionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput | Self::NoValidCoordinates => ErrorKind::Validation,
            Self::Network(_) => ErrorKind::Transport,
            Self::Server { .. } | Self::MalformedResponse(_) => ErrorKind::Server,
        }
    }

    /// Input problems are reported before anything is written or sent.
    pub fn is_local(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
