//! Core functionality for telugu-bot
//!
//! This crate contains the reply resolution policy for the Telugu/English
//! chatbot, the translate and summarize tasks, and the collaborators they
//! call through (language detection, text generation, instruction dataset).

pub mod bot;
pub mod chat;
pub mod config;
pub mod dataset;
pub mod language;
pub mod llm;
pub mod tasks;

pub use bot::{ChatBot, Mode, TaskOutcome};
pub use chat::{ReplySource, Resolution, ResponseResolver, Transcript};
pub use config::BotConfig;
pub use language::Language;
