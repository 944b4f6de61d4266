use std::fmt;

pub const MISSING_CONTEXT_TEXT: &str = "Open this page from Telegram.";
pub const UNAUTHORIZED_TEXT: &str = "Unauthorized";
pub const NOT_FOUND_TEXT: &str = "No program found";
pub const SERVER_ERROR_TEXT: &str = "Server error";

/// Terminal outcomes of a load that are not a rendered payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    MissingContext,
    Unauthorized,
    NotFound,
    ServerFailure(String),
}

impl LoadError {
    /// Text shown in the content element.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingContext => MISSING_CONTEXT_TEXT,
            Self::Unauthorized => UNAUTHORIZED_TEXT,
            Self::NotFound => NOT_FOUND_TEXT,
            Self::ServerFailure(_) => SERVER_ERROR_TEXT,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServerFailure(detail) => write!(f, "server failure: {detail}"),
            other => f.write_str(other.message()),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport error: {}", self.message)
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<TransportError> for LoadError {
    fn from(err: TransportError) -> Self {
        Self::ServerFailure(err.message)
    }
}

#[derive(Debug)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl ConfigError {
    pub fn invalid(key: &'static str, err: impl fmt::Display) -> Self {
        Self {
            key,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.key, self.message)
    }
}

impl std::error::Error for ConfigError {}
