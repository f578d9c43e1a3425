// Command handlers

pub mod ask;
pub mod chat;
pub mod init;
pub mod task;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use telugu_bot_core::{BotConfig, ChatBot};
use tracing::debug;

/// Load configuration and wire the bot
pub async fn load_bot(config_path: Option<&Path>) -> Result<(BotConfig, ChatBot)> {
    let config = BotConfig::load_or_default(config_path).context("Failed to load configuration")?;
    debug!("configuration: {:?}", config);

    let bot = ChatBot::from_config(&config).await?;
    Ok((config, bot))
}

/// Seeded RNG when a seed is given, entropy otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
