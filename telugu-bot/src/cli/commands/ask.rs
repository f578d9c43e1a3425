//! One-shot chat turn

use anyhow::Result;
use std::path::Path;
use tracing::info;

use super::{load_bot, make_rng};
use crate::cli::app::AskArgs;

pub async fn execute(args: AskArgs, config_path: Option<&Path>) -> Result<()> {
    let (_, bot) = load_bot(config_path).await?;
    let text = args.text.join(" ");
    let mut rng = make_rng(args.seed);

    let resolution = bot.resolver().resolve_detailed(&text, &mut rng).await;
    info!("reply from {:?}", resolution.source);

    if args.json {
        let output = serde_json::json!({
            "input": text,
            "reply": resolution.reply,
            "source": format!("{:?}", resolution.source).to_lowercase(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", resolution.reply);
    }

    Ok(())
}
