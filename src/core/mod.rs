pub mod aggregator;
pub mod client;
pub mod engine;
pub mod normalizer;

pub use crate::domain::model::{Poem, SearchRequest};
pub use crate::domain::ports::{ConfigProvider, PoemSource};
pub use crate::utils::error::Result;
