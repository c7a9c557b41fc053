//! Content Errors
//!
//! Every failure of a backend call collapses into one of three kinds.

use thiserror::Error;

pub type ContentResult<T> = Result<T, ContentError>;

#[derive(Debug, Error)]
pub enum ContentError {
    /// The server answered with a non-2xx status
    #[error("API Error: {status} - {status_text}")]
    Transport { status: u16, status_text: String },

    /// The request never reached the server, or the response never came back
    #[error("Network error: {cause}")]
    Network {
        #[from]
        cause: reqwest::Error,
    },

    /// The body was not valid JSON, or not the JSON shape we asked for
    #[error("JSON error: {cause}")]
    Decode {
        #[from]
        cause: serde_json::Error,
    },
}

impl ContentError {
    /// HTTP status for transport errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ContentError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}
