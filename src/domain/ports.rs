use crate::domain::model::Poem;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_BASE_URL: &str = "https://poetrydb.org";
pub const DEFAULT_USER_AGENT: &str = concat!("poetry-explorer/", env!("CARGO_PKG_VERSION"));

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn user_agent(&self) -> &str {
        DEFAULT_USER_AGENT
    }
}

/// Remote lookups a search is assembled from.
#[async_trait]
pub trait PoemSource: Send + Sync {
    async fn search_by_author(&self, author: &str) -> Result<Vec<Poem>>;
    async fn search_by_title(&self, title: &str) -> Result<Vec<Poem>>;
    async fn random_poem(&self) -> Result<Poem>;
}
