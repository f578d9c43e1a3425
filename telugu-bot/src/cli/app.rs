use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use telugu_bot_core::Mode;

#[derive(Parser, Debug)]
#[command(
    name = "telugu-bot",
    version,
    about = "TeluguBot - chat, translate and summarize in Telugu and English",
    long_about = "TeluguBot is a bilingual Telugu/English chatbot. It answers from built-in phrase tables and an optional instruction dataset, and uses a generative model for translation, summaries and open conversation."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session
    #[command(about = "Start an interactive chat session")]
    Chat(ChatArgs),

    /// Single chat turn
    #[command(about = "Ask one question and print the reply")]
    Ask(AskArgs),

    /// Translate between Telugu and English
    #[command(about = "Translate text between Telugu and English")]
    Translate(TaskArgs),

    /// Summarize text
    #[command(about = "Summarize text in Telugu or English")]
    Summarize(TaskArgs),

    /// Write the default configuration file
    #[command(about = "Write a default telugu-bot.toml")]
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Seed for reproducible replies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print replies at once instead of word by word
    #[arg(long)]
    pub no_typing: bool,

    /// Save the transcript as JSON on exit
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Initial mode
    #[arg(long, default_value = "chat")]
    pub mode: Mode,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Message to send
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Seed for reproducible replies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the reply and the tier that produced it as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TaskArgs {
    /// Text to process
    pub text: Vec<String>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}
