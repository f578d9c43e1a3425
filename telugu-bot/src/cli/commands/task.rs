//! Translate and summarize commands

use anyhow::Result;
use std::path::Path;
use telugu_bot_core::{ChatBot, Mode, TaskOutcome};

use super::load_bot;
use crate::cli::app::TaskArgs;

pub async fn execute(mode: Mode, args: TaskArgs, config_path: Option<&Path>) -> Result<()> {
    let (_, bot) = load_bot(config_path).await?;
    submit(&bot, mode, &args.text.join(" ")).await;
    Ok(())
}

/// Run one task and print the outcome
pub async fn submit(bot: &ChatBot, mode: Mode, text: &str) {
    match bot.run_task(mode, text).await {
        TaskOutcome::Completed { title, body } => {
            println!("{title}");
            println!("{}", "-".repeat(title.chars().count()));
            println!("{body}");
        }
        TaskOutcome::Warning(message) => eprintln!("⚠ {message}"),
    }
}
