use thiserror::Error;

/// Shown when the query is empty after trimming.
pub const VALIDATION_MESSAGE: &str = "Please enter a word.";
/// Shown when the service rejects a lookup without a usable `title`.
pub const API_FALLBACK_MESSAGE: &str = "Something went wrong.";
/// Shown for every transport or decoding failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Why a lookup did not produce entries.
///
/// The UI collapses each variant into one line of text via
/// [`LookupError::user_message`]; the detail carried here only goes to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("service returned {status}: {}", title.as_deref().unwrap_or("<no title>"))]
    Api { status: u16, title: Option<String> },

    #[error("transport failure: {0}")]
    Transport(String),
}

impl LookupError {
    pub fn user_message(&self) -> String {
        match self {
            LookupError::EmptyQuery => VALIDATION_MESSAGE.to_string(),
            LookupError::Api { title, .. } => title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(API_FALLBACK_MESSAGE)
                .to_string(),
            LookupError::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(e.to_string())
    }
}
