pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::session::{SearchSession, ViewState};
pub use config::toml_config::TomlConfig;
pub use core::{client::PoetryDbClient, engine::SearchEngine};
pub use domain::model::{Poem, SearchRequest};
pub use utils::error::{ErrorKind, PoetryError, Result};
