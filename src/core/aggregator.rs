use crate::domain::model::{DedupKey, Poem};
use crate::utils::error::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::HashSet;
use std::future::Future;

/// Per-search merge state: how many lookups are out, how many came back, and
/// the poems admitted so far in first-seen order.
#[derive(Debug, Default)]
pub struct AggregationState {
    dispatched: usize,
    completed: usize,
    seen: HashSet<DedupKey>,
    poems: Vec<Poem>,
}

impl AggregationState {
    pub fn new(dispatched: usize) -> Self {
        Self {
            dispatched,
            ..Self::default()
        }
    }

    /// Records one finished lookup. Poems whose key was already admitted are
    /// dropped, even when their other fields differ.
    pub fn absorb(&mut self, poems: Vec<Poem>) {
        self.completed += 1;
        for poem in poems {
            if self.seen.insert(poem.dedup_key()) {
                self.poems.push(poem);
            }
        }
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.dispatched
    }

    pub fn len(&self) -> usize {
        self.poems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    pub fn into_poems(self) -> Vec<Poem> {
        self.poems
    }
}

/// Runs every lookup concurrently and merges the results as each one lands.
///
/// Nothing is returned until all lookups succeed. The first failure ends the
/// whole aggregation and whatever was already merged is thrown away.
pub async fn aggregate<F>(lookups: Vec<F>) -> Result<Vec<Poem>>
where
    F: Future<Output = Result<Vec<Poem>>>,
{
    let mut state = AggregationState::new(lookups.len());
    let mut pending: FuturesUnordered<F> = lookups.into_iter().collect();

    while let Some(outcome) = pending.next().await {
        match outcome {
            Ok(poems) => {
                tracing::debug!(
                    "lookup {}/{} returned {} poems",
                    state.completed() + 1,
                    state.dispatched,
                    poems.len()
                );
                state.absorb(poems);
            }
            Err(e) => {
                tracing::debug!(
                    "lookup failed after {} completed, discarding {} merged poems",
                    state.completed(),
                    state.len()
                );
                return Err(e);
            }
        }
    }

    debug_assert!(state.is_complete());
    Ok(state.into_poems())
}
