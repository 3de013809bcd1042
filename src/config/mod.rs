#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::Command;

#[cfg(feature = "cli")]
use crate::app::render::OutputFormat;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::ports::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "poetry-explorer")]
#[command(about = "Search the Poetry Database by author or title, or pull a random poem")]
pub struct CliConfig {
    #[arg(long, global = true, help = "PoetryDB base URL [default: https://poetrydb.org]")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "User-Agent sent with every request")]
    pub user_agent: Option<String>,

    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Output format: text or json")]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fills every option not given on the command line from the file.
    pub fn merge_file(&mut self, file: &toml_config::TomlConfig) {
        if self.base_url.is_none() {
            self.base_url = Some(file.api.base_url.clone());
        }
        if self.user_agent.is_none() {
            self.user_agent = file.api.user_agent.clone();
        }
        if self.format.is_none() {
            self.format = file.output_format();
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::*;

        validate_url("base_url", self.base_url())?;
        validate_non_empty_string("user_agent", self.user_agent())?;

        tracing::debug!("CLI configuration validation passed");
        Ok(())
    }
}
