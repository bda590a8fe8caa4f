use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Tocify operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Tocify operations
#[derive(Debug)]
pub enum TocifyError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Document parsing error
    Parse(String),
    /// Output rendering error
    Render(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocifyError::Io(err) => write!(f, "IO error: {}", err),
            TocifyError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocifyError::Parse(msg) => write!(f, "Parse error: {}", msg),
            TocifyError::Render(msg) => write!(f, "Render error: {}", msg),
            TocifyError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocifyError {}

impl From<io::Error> for TocifyError {
    fn from(err: io::Error) -> Self {
        TocifyError::Io(err)
    }
}

impl From<String> for TocifyError {
    fn from(msg: String) -> Self {
        TocifyError::Generic(msg)
    }
}

impl From<&str> for TocifyError {
    fn from(msg: &str) -> Self {
        TocifyError::Generic(msg.to_string())
    }
}
