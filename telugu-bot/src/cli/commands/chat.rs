//! Interactive session

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use telugu_bot_core::chat::Role;
use telugu_bot_core::{Mode, Transcript};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::{load_bot, make_rng, task};
use crate::cli::app::ChatArgs;
use crate::cli::typing::Typewriter;

const HELP: &str = "\
Commands:
  /mode chat|translate|summarize   switch mode
  /history                         show the conversation so far
  /help                            show this help
  /quit                            leave";

/// Control line entered at the prompt
#[derive(Debug, PartialEq, Eq)]
enum Control {
    Mode(Mode),
    History,
    Help,
    Quit,
    Unknown(String),
}

fn parse_control(line: &str) -> Option<Control> {
    let rest = line.strip_prefix('/')?;
    let mut parts = rest.split_whitespace();
    let control = match parts.next().unwrap_or_default() {
        "mode" => match parts.next().map(str::parse::<Mode>) {
            Some(Ok(mode)) => Control::Mode(mode),
            Some(Err(e)) => Control::Unknown(e),
            None => Control::Unknown("usage: /mode chat|translate|summarize".to_string()),
        },
        "history" => Control::History,
        "help" => Control::Help,
        "quit" | "exit" => Control::Quit,
        other => Control::Unknown(format!("unknown command '/{other}' (try /help)")),
    };
    Some(control)
}

fn print_history(transcript: &Transcript) {
    if transcript.is_empty() {
        println!("(no messages yet)");
        return;
    }
    for entry in transcript.entries() {
        let speaker = match entry.role {
            Role::User => "You",
            Role::Assistant => "Bot",
        };
        println!("{speaker}: {}", entry.content);
    }
}

pub async fn execute(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    let (config, bot) = load_bot(config_path).await?;
    let mut rng = make_rng(args.seed);
    let typewriter = if args.no_typing {
        Typewriter::instant()
    } else {
        Typewriter::new(config.ui.typing_delay_ms)
    };

    let mut transcript = Transcript::new();
    let mut mode = args.mode;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("TeluguBot ({mode} mode). Type /help for commands.");

    loop {
        print!("[{mode}] > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let line = line.trim_end();

        if let Some(control) = parse_control(line) {
            debug!("control: {:?}", control);
            match control {
                Control::Mode(next) => {
                    mode = next;
                    println!("Switched to {mode} mode.");
                }
                Control::History => print_history(&transcript),
                Control::Help => println!("{HELP}"),
                Control::Quit => break,
                Control::Unknown(message) => eprintln!("{message}"),
            }
            continue;
        }

        match mode {
            Mode::Chat => {
                if line.trim().is_empty() {
                    continue;
                }
                let reply = bot.chat(&mut transcript, line, &mut rng).await;
                typewriter.print(&reply).await?;
            }
            Mode::Translate | Mode::Summarize => task::submit(&bot, mode, line).await,
        }
    }

    if let Some(path) = &args.save {
        transcript.save(path)?;
        info!("saved {} messages to {}", transcript.len(), path.display());
        println!("Transcript saved to {}", path.display());
    }

    Ok(())
}
