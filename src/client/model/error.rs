use thiserror::Error;

/// Failure of a call against the management API.
///
/// Both variants render as a plain human-readable message so views can show
/// them without matching on the kind.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ApiError {
    /// The request never produced a successful response: the fetch itself
    /// failed or the server answered with a non-2xx status.
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    /// The server answered 2xx but the body was not the expected shape.
    #[error("{message}")]
    Validation { message: String },
}

impl ApiError {
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => *status,
            ApiError::Validation { .. } => None,
        }
    }
}
