use crate::core::engine::SearchEngine;
use crate::core::{Poem, PoemSource, SearchRequest};
use crate::utils::error::{ErrorKind, PoetryError, Result};

pub const EMPTY_FORM_MESSAGE: &str = "Please enter an author name or poem title";
pub const NO_RESULTS_HINT: &str = "No poems found. Try different search terms.";

/// What the results view is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Searching,
    Success(Vec<Poem>),
    Empty { hint: String },
    Error { kind: ErrorKind, message: String },
}

/// Drives the results view through `Idle -> Searching -> {Success, Empty, Error}`.
///
/// Outcomes are never matched against the action that produced them: if two
/// actions overlap, whichever outcome is applied last is what stays visible.
#[derive(Debug, Clone)]
pub struct SearchSession {
    state: ViewState,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Searching)
    }

    pub fn displayed_poems(&self) -> &[Poem] {
        match &self.state {
            ViewState::Success(poems) => poems,
            _ => &[],
        }
    }

    /// Validates the form. On success the view switches to `Searching` and the
    /// trimmed request is handed back for dispatch.
    pub fn submit_search(&mut self, author: &str, title: &str) -> Option<SearchRequest> {
        match SearchRequest::new(author, title) {
            Ok(request) => {
                self.state = ViewState::Searching;
                Some(request)
            }
            Err(_) => {
                tracing::debug!("search form submitted with both fields empty");
                self.state = ViewState::Error {
                    kind: ErrorKind::InvalidArgument,
                    message: EMPTY_FORM_MESSAGE.to_string(),
                };
                None
            }
        }
    }

    pub fn submit_random(&mut self) {
        self.state = ViewState::Searching;
    }

    pub fn apply_search(&mut self, outcome: Result<Vec<Poem>>) {
        self.state = match outcome {
            Ok(poems) if poems.is_empty() => ViewState::Empty {
                hint: NO_RESULTS_HINT.to_string(),
            },
            Ok(poems) => ViewState::Success(poems),
            Err(e) => Self::error_state(&e),
        };
    }

    pub fn apply_random(&mut self, outcome: Result<Poem>) {
        self.state = match outcome {
            Ok(poem) => ViewState::Success(vec![poem]),
            Err(e) => Self::error_state(&e),
        };
    }

    pub fn reset(&mut self) {
        self.state = ViewState::Idle;
    }

    pub async fn search<S: PoemSource>(
        &mut self,
        engine: &SearchEngine<S>,
        author: &str,
        title: &str,
    ) -> &ViewState {
        if let Some(request) = self.submit_search(author, title) {
            let outcome = engine.search(&request).await;
            self.apply_search(outcome);
        }
        &self.state
    }

    pub async fn random<S: PoemSource>(&mut self, engine: &SearchEngine<S>) -> &ViewState {
        self.submit_random();
        let outcome = engine.random_poem().await;
        self.apply_random(outcome);
        &self.state
    }

    fn error_state(error: &PoetryError) -> ViewState {
        ViewState::Error {
            kind: error.kind(),
            message: error.user_friendly_message(),
        }
    }
}
