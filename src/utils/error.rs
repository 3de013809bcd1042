use thiserror::Error;

/// Discriminant of [`PoetryError`], handy for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Network,
    NotFound,
    ServerFault,
    ClientFault,
    MalformedPayload,
    Unknown,
    Config,
    Io,
}

impl ErrorKind {
    /// Process exit code used by the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::InvalidArgument | ErrorKind::Config | ErrorKind::Io => 1,
            ErrorKind::Network
            | ErrorKind::NotFound
            | ErrorKind::ServerFault
            | ErrorKind::ClientFault
            | ErrorKind::MalformedPayload
            | ErrorKind::Unknown => 2,
        }
    }
}

/// Every variant's `Display` is the message shown to the user.
#[derive(Error, Debug)]
pub enum PoetryError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Network error: unable to reach the server at {base_url}")]
    Network {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation}: No results found. Please try a different search.")]
    NotFound { operation: String },

    #[error("Server error ({status}): the remote service is temporarily unavailable.")]
    ServerFault { status: u16 },

    #[error("Request error ({status}): {status_text}")]
    ClientFault { status: u16, status_text: String },

    #[error("{operation}: {message}")]
    MalformedPayload { operation: String, message: String },

    #[error("{operation} failed")]
    Unknown { operation: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PoetryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PoetryError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            PoetryError::Network { .. } => ErrorKind::Network,
            PoetryError::NotFound { .. } => ErrorKind::NotFound,
            PoetryError::ServerFault { .. } => ErrorKind::ServerFault,
            PoetryError::ClientFault { .. } => ErrorKind::ClientFault,
            PoetryError::MalformedPayload { .. } => ErrorKind::MalformedPayload,
            PoetryError::Unknown { .. } | PoetryError::SerializationError(_) => ErrorKind::Unknown,
            PoetryError::ConfigError { .. } | PoetryError::InvalidConfigValueError { .. } => {
                ErrorKind::Config
            }
            PoetryError::IoError(_) => ErrorKind::Io,
        }
    }

    /// The message for the error banner. Same as `Display`, never the raw cause.
    pub fn user_friendly_message(&self) -> String {
        self.to_string()
    }

    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

pub type Result<T> = std::result::Result<T, PoetryError>;
