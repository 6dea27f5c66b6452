use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for blog-migrate operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for blog-migrate operations
#[derive(Debug)]
pub enum MigrateError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error (missing or unreadable `_config.yml`, bad flags)
    Config(String),
    /// A required environment variable is not set
    MissingEnv(&'static str),
    /// Front matter could not be read as YAML
    FrontMatter(String),
    /// The 404 log could not be read
    Csv(String),
    /// The completion endpoint failed or answered with something unusable
    Translation(String),
    /// Generic error message
    Generic(String),
}

impl MigrateError {
    /// Process exit status for a fatal error of this kind
    pub fn exit_code(&self) -> i32 {
        match self {
            MigrateError::MissingEnv(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrateError::Io(err) => write!(f, "IO error: {}", err),
            MigrateError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MigrateError::MissingEnv(name) => write!(f, "{} is not set", name),
            MigrateError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            MigrateError::Csv(msg) => write!(f, "CSV error: {}", msg),
            MigrateError::Translation(msg) => write!(f, "Translation error: {}", msg),
            MigrateError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for MigrateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MigrateError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MigrateError {
    fn from(err: io::Error) -> Self {
        MigrateError::Io(err)
    }
}

impl From<csv::Error> for MigrateError {
    fn from(err: csv::Error) -> Self {
        MigrateError::Csv(err.to_string())
    }
}

impl From<serde_yaml::Error> for MigrateError {
    fn from(err: serde_yaml::Error) -> Self {
        MigrateError::FrontMatter(err.to_string())
    }
}

impl From<reqwest::Error> for MigrateError {
    fn from(err: reqwest::Error) -> Self {
        MigrateError::Translation(err.to_string())
    }
}

impl From<String> for MigrateError {
    fn from(msg: String) -> Self {
        MigrateError::Generic(msg)
    }
}

impl From<&str> for MigrateError {
    fn from(msg: &str) -> Self {
        MigrateError::Generic(msg.to_string())
    }
}

/// Exit status for a boxed error, honouring [`MigrateError::exit_code`]
pub fn exit_code_for(err: &(dyn Error + 'static)) -> i32 {
    err.downcast_ref::<MigrateError>()
        .map_or(1, MigrateError::exit_code)
}
