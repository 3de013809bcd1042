use crate::core::aggregator::aggregate;
use crate::core::{Poem, PoemSource};
use crate::domain::model::SearchRequest;
use crate::utils::error::Result;

/// Fans a combined author/title search out over a [`PoemSource`].
pub struct SearchEngine<S: PoemSource> {
    source: S,
}

impl<S: PoemSource> SearchEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn search_by_author_and_title(&self, author: &str, title: &str) -> Result<Vec<Poem>> {
        let request = SearchRequest::new(author, title)?;
        self.search(&request).await
    }

    /// One lookup per non-empty field, all in flight at once.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Poem>> {
        let mut lookups = Vec::with_capacity(request.lookup_count());
        if let Some(author) = request.author() {
            lookups.push(self.source.search_by_author(author));
        }
        if let Some(title) = request.title() {
            lookups.push(self.source.search_by_title(title));
        }

        tracing::info!(
            author = request.author().unwrap_or(""),
            title = request.title().unwrap_or(""),
            "dispatching {} lookup(s)",
            lookups.len()
        );

        let poems = aggregate(lookups).await?;
        tracing::info!("search returned {} unique poems", poems.len());
        Ok(poems)
    }

    pub async fn random_poem(&self) -> Result<Poem> {
        tracing::info!("fetching a random poem");
        self.source.random_poem().await
    }
}
