//! Write the default configuration

use anyhow::{Context, Result, bail};
use std::path::Path;
use telugu_bot_core::BotConfig;
use telugu_bot_core::config::DEFAULT_CONFIG_FILE;
use tracing::info;

use crate::cli::app::InitArgs;

pub fn execute(args: InitArgs, config_path: Option<&Path>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    if path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    BotConfig::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("wrote {}", path.display());

    println!("Created {}", path.display());
    println!("Set the API key in a .env file, e.g. GENAI_API_KEY=...");
    Ok(())
}
