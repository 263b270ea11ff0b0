//! Error types for knowledge base generation.

use thiserror::Error;

/// Everything that can abort a knowledge base run.
///
/// There is no degraded mode: any of these ends the run and no document is
/// emitted.
#[derive(Error, Debug)]
pub enum KbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: status {status} from {url}")]
    Api { status: u16, url: String },

    #[error("Error decoding response from {url}: path={path} error={message}")]
    Decode {
        url: String,
        path: String,
        message: String,
    },

    #[error("Pagination loop detected: next link {url} was already fetched")]
    Pagination { url: String },

    #[error("Invalid address '{value}': {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error("Dangling reference: {from} references {target} #{id} which does not exist")]
    DanglingReference {
        from: String,
        target: &'static str,
        id: u64,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl KbError {
    /// Shorthand for a [`KbError::DanglingReference`].
    pub fn dangling(from: impl Into<String>, target: &'static str, id: u64) -> Self {
        KbError::DanglingReference {
            from: from.into(),
            target,
            id,
        }
    }
}

pub type Result<T> = std::result::Result<T, KbError>;
