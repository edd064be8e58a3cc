use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Serialization(String),
    /// A value the request needs was not present in the form or the
    /// navigation context.
    MissingParameter(String),
}

impl AppError {
    /// Short, stable label used in log fields instead of the full message.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Network(_) => "network",
            AppError::Timeout(_) => "timeout",
            AppError::Http { .. } => "http",
            AppError::Serialization(_) => "serialization",
            AppError::MissingParameter(_) => "missing_parameter",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::MissingParameter(name) => {
                write!(formatter, "Missing required parameter: {name}")
            }
        }
    }
}

impl std::error::Error for AppError {}
