use crate::core::normalizer::{ErrorNormalizer, RawFailure, AUTHOR_SEARCH, RANDOM_POEM, TITLE_SEARCH};
use crate::core::{ConfigProvider, Poem, PoemSource};
use crate::domain::model::PoemsPayload;
use crate::utils::error::{PoetryError, Result};
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use url::Url;

/// Everything `encodeURIComponent` escapes: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `PoemSource` backed by the PoetryDB HTTP API.
#[derive(Debug, Clone)]
pub struct PoetryDbClient {
    client: Client,
    base_url: Url,
    normalizer: ErrorNormalizer,
}

impl PoetryDbClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| PoetryError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Self::with_client(client, config.base_url())
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| PoetryError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(PoetryError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot be used as a base for lookups".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            normalizer: ErrorNormalizer::new(base_url.trim_end_matches('/')),
        })
    }

    pub fn base_url(&self) -> &str {
        self.normalizer.base_url()
    }

    /// Appends path segments to the base URL, percent-encoding each one the
    /// way `encodeURIComponent` would (`/` included).
    ///
    /// `.` and `..` are rejected: URL parsing collapses them even when
    /// escaped, so they cannot be sent as a segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut path = self.base_url.path().trim_end_matches('/').to_string();
        for segment in segments {
            if matches!(*segment, "." | "..") {
                return Err(PoetryError::InvalidArgument {
                    message: format!("'{}' cannot be used as a search term", segment),
                });
            }
            path.push('/');
            path.extend(utf8_percent_encode(segment, URI_COMPONENT));
        }

        let mut url = self.base_url.clone();
        url.set_path(&path);
        Ok(url)
    }

    async fn fetch_json(&self, operation: &str, url: Url) -> Result<serde_json::Value> {
        tracing::debug!("{}: GET {}", operation, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.normalizer.normalize(operation, RawFailure::Unreachable(e)))?;

        let status = response.status();
        tracing::debug!("{} response status: {}", operation, status);

        if !status.is_success() {
            return Err(self.normalizer.normalize(operation, RawFailure::Status(status)));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| self.normalizer.normalize(operation, RawFailure::Other(Box::new(e))))?;

        if body.is_null() {
            return Err(self.normalizer.normalize(
                operation,
                RawFailure::Application("Invalid response from server".to_string()),
            ));
        }

        Ok(body)
    }

    async fn lookup(&self, operation: &str, field: &str, value: &str) -> Result<Vec<Poem>> {
        let body = self.fetch_json(operation, self.endpoint(&[field, value])?).await?;

        let payload = PoemsPayload::from_value(body);
        if let PoemsPayload::Unrecognized(ref value) = payload {
            tracing::warn!(
                "{}: unrecognized response shape, treating as no results: {}",
                operation,
                value
            );
        }

        let poems = payload.into_poems();
        tracing::debug!("{}: {} poems for {:?}", operation, poems.len(), value);
        Ok(poems)
    }
}

#[async_trait]
impl PoemSource for PoetryDbClient {
    async fn search_by_author(&self, author: &str) -> Result<Vec<Poem>> {
        let author = author.trim();
        if author.is_empty() {
            return Err(PoetryError::InvalidArgument {
                message: "Author name cannot be empty".to_string(),
            });
        }
        self.lookup(AUTHOR_SEARCH, "author", author).await
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Poem>> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PoetryError::InvalidArgument {
                message: "Title cannot be empty".to_string(),
            });
        }
        self.lookup(TITLE_SEARCH, "title", title).await
    }

    async fn random_poem(&self) -> Result<Poem> {
        let body = self.fetch_json(RANDOM_POEM, self.endpoint(&["random"])?).await?;

        let first = match PoemsPayload::from_value(body) {
            PoemsPayload::List(entries) => entries
                .into_iter()
                .next()
                .and_then(|entry| serde_json::from_value::<Poem>(entry).ok()),
            _ => None,
        };

        first.ok_or_else(|| {
            self.normalizer.normalize(
                RANDOM_POEM,
                RawFailure::Application("Invalid response format".to_string()),
            )
        })
    }
}
