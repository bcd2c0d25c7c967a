use thiserror::Error;

/// Failures talking to the attendance backend. A rejected request
/// carries the backend's `{error}` text when the body was parseable;
/// transport failures keep the reqwest error for the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend rejected the request")]
    Rejected { message: Option<String> },
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// The single string shown to the user. Backend-provided text wins;
    /// everything else (missing body, transport failure) collapses to
    /// the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(text),
            } if !text.is_empty() => text.clone(),
            _ => fallback.to_owned(),
        }
    }
}
