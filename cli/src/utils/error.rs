use std::fmt;

/// Result type alias for orr-admin operations
pub type OrrResult<T> = Result<T, OrrError>;

/// Main error type for the orr-admin CLI
#[derive(Debug)]
pub enum OrrError {
    /// IO-related errors
    Io(std::io::Error),
    /// Transport-level HTTP errors (DNS, connection refused, timeout)
    Http(reqwest::Error),
    /// JSON serialization/deserialization errors
    Json(serde_json::Error),
    /// TOML parsing errors
    Toml(toml::de::Error),
    /// Configuration errors
    Config(String),
    /// A required environment variable is unset or empty
    MissingEnv(String),
    /// Non-success response from the registry
    Api { status: u16, message: String },
    /// Invalid operator-supplied argument
    InvalidArgument(String),
    /// Generic errors with custom message
    Other(String),
}

impl OrrError {
    /// Process exit status for this error.
    ///
    /// Registry errors are reported but count as a handled outcome, so they
    /// map to 0. Only a missing environment variable yields 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            OrrError::Api { .. } => 0,
            OrrError::MissingEnv(_) => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for OrrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrrError::Io(e) => write!(f, "IO error: {}", e),
            OrrError::Http(e) => write!(f, "HTTP error: {}", e),
            OrrError::Json(e) => write!(f, "JSON error: {}", e),
            OrrError::Toml(e) => write!(f, "TOML error: {}", e),
            OrrError::Config(msg) => write!(f, "Configuration error: {}", msg),
            OrrError::MissingEnv(name) => write!(f, "undefined env var {}", name),
            OrrError::Api { status, message } => write!(f, "{}: {}", status, message),
            OrrError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            OrrError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for OrrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrrError::Io(e) => Some(e),
            OrrError::Http(e) => Some(e),
            OrrError::Json(e) => Some(e),
            OrrError::Toml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrrError {
    fn from(err: std::io::Error) -> Self {
        OrrError::Io(err)
    }
}

impl From<reqwest::Error> for OrrError {
    fn from(err: reqwest::Error) -> Self {
        OrrError::Http(err)
    }
}

impl From<serde_json::Error> for OrrError {
    fn from(err: serde_json::Error) -> Self {
        OrrError::Json(err)
    }
}

impl From<toml::de::Error> for OrrError {
    fn from(err: toml::de::Error) -> Self {
        OrrError::Toml(err)
    }
}
