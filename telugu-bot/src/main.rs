use anyhow::Result;
use clap::Parser;
use telugu_bot_core::Mode;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    // .env may hold the generator API key
    dotenvy::dotenv().ok();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Chat(args) => {
            info!("Chat command: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::chat::execute(args, config_path))?;
        }
        Commands::Ask(args) => {
            info!("Ask command: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::ask::execute(args, config_path))?;
        }
        Commands::Translate(args) => {
            info!("Translate command: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::task::execute(Mode::Translate, args, config_path))?;
        }
        Commands::Summarize(args) => {
            info!("Summarize command: {:?}", args);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::task::execute(Mode::Summarize, args, config_path))?;
        }
        Commands::Init(args) => {
            info!("Initializing telugu-bot configuration");
            cli::commands::init::execute(args, config_path)?;
        }
    }

    Ok(())
}
