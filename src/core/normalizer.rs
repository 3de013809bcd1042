use crate::utils::error::PoetryError;
use reqwest::StatusCode;

pub const AUTHOR_SEARCH: &str = "Author search";
pub const TITLE_SEARCH: &str = "Title search";
pub const RANDOM_POEM: &str = "Random poem retrieval";

/// What went wrong at the transport boundary, before classification.
#[derive(Debug)]
pub enum RawFailure {
    /// No response came back at all.
    Unreachable(reqwest::Error),
    /// A response came back with a non-success status.
    Status(StatusCode),
    /// Raised locally after a response was received, e.g. a body of the wrong shape.
    Application(String),
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Turns raw transport failures into the single message shown for an operation.
#[derive(Debug, Clone)]
pub struct ErrorNormalizer {
    base_url: String,
}

impl ErrorNormalizer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn normalize(&self, operation: &str, raw: RawFailure) -> PoetryError {
        let cause = format!("{:?}", raw);

        let error = match raw {
            RawFailure::Unreachable(source) => PoetryError::Network {
                base_url: self.base_url.clone(),
                source,
            },
            RawFailure::Status(status) if status == StatusCode::NOT_FOUND => PoetryError::NotFound {
                operation: operation.to_string(),
            },
            RawFailure::Status(status) if status.is_server_error() => PoetryError::ServerFault {
                status: status.as_u16(),
            },
            RawFailure::Status(status) if status.is_client_error() => PoetryError::ClientFault {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Client error").to_string(),
            },
            RawFailure::Application(message) => PoetryError::MalformedPayload {
                operation: operation.to_string(),
                message,
            },
            RawFailure::Status(_) | RawFailure::Other(_) => PoetryError::Unknown {
                operation: operation.to_string(),
            },
        };

        tracing::error!(operation, cause = %cause, "[PoetryDB Error] {}", error);
        error
    }
}
