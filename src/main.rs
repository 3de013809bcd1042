use clap::Parser;
use poetry_explorer::app::render;
use poetry_explorer::utils::{logger, validation::Validate};
use poetry_explorer::{
    CliConfig, Command, PoetryDbClient, SearchEngine, SearchSession, TomlConfig, ViewState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting poetry-explorer CLI");

    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path) {
            Ok(file) => {
                tracing::debug!("Loaded configuration file {}", path.display());
                config.merge_file(&file);
            }
            Err(e) => {
                tracing::error!("❌ Failed to load {}: {}", path.display(), e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.exit_code());
            }
        }
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let client = PoetryDbClient::new(&config)?;
    let engine = SearchEngine::new(client);
    let mut session = SearchSession::new();

    let state = match &config.command {
        Command::Search { author, title } => {
            session
                .search(
                    &engine,
                    author.as_deref().unwrap_or(""),
                    title.as_deref().unwrap_or(""),
                )
                .await
        }
        Command::Random => session.random(&engine).await,
    };

    let rendered = render::render_state(state, config.output_format())?;

    match state {
        ViewState::Error { kind, .. } => {
            eprintln!("{}", rendered);
            std::process::exit(kind.exit_code());
        }
        _ => {
            println!("{}", rendered);
        }
    }

    Ok(())
}
