//! Bot facade used by the presentation layer
//!
//! [`ChatBot`] wires the resolver and the translate/summarize tasks from a
//! [`BotConfig`] and exposes one call per mode.

use crate::chat::{CategoryReplies, PhraseTable, ResponseResolver, Transcript};
use crate::config::BotConfig;
use crate::dataset::load_dataset;
use crate::language::{LanguageDetector, ScriptDetector};
use crate::llm::{GeminiGenerator, TextGenerator};
use crate::tasks::{Summarizer, Translator};
use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Shown when the text box is blank in Translate or Summarize mode
pub const EMPTY_TEXT_WARNING: &str = "దయచేసి వచనాన్ని నమోదు చేయండి.";

const CHAT_MODE_WARNING: &str = "Chat mode takes conversational turns; send the text as a chat message instead.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Chat,
    Translate,
    Summarize,
}

impl Mode {
    /// Heading for a completed task
    pub fn result_title(&self) -> Option<&'static str> {
        match self {
            Mode::Chat => None,
            Mode::Translate => Some("Translation Result"),
            Mode::Summarize => Some("Summary Result"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" => Ok(Mode::Chat),
            "translate" => Ok(Mode::Translate),
            "summarize" | "summarise" => Ok(Mode::Summarize),
            other => Err(format!("unknown mode '{other}' (expected chat, translate or summarize)")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Chat => "Chat",
            Mode::Translate => "Translate",
            Mode::Summarize => "Summarize",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Completed { title: &'static str, body: String },
    Warning(String),
}

pub struct ChatBot {
    resolver: ResponseResolver,
    translator: Arc<Translator>,
    summarizer: Arc<Summarizer>,
}

impl ChatBot {
    /// Build from already constructed collaborators
    pub fn new(
        resolver: ResponseResolver,
        translator: Arc<Translator>,
        summarizer: Arc<Summarizer>,
    ) -> Self {
        Self { resolver, translator, summarizer }
    }

    /// Wire every collaborator from configuration
    ///
    /// A missing API key or an unloadable dataset only disables the parts
    /// that need them. An invalid phrase file is an error.
    pub async fn from_config(config: &BotConfig) -> Result<Self> {
        let generator: Option<Arc<dyn TextGenerator>> = if config.generator.enabled {
            match GeminiGenerator::from_env(&config.generator) {
                Ok(generator) => {
                    info!("text generator: {} ({})", generator.name(), generator.model());
                    Some(Arc::new(generator))
                }
                Err(e) => {
                    warn!("text generator disabled: {}", e);
                    None
                }
            }
        } else {
            info!("text generator disabled in configuration");
            None
        };

        let phrases = match &config.chat.phrases_file {
            Some(path) => PhraseTable::from_file(path)
                .with_context(|| format!("Failed to load phrase table {}", path.display()))?,
            None => PhraseTable::builtin(),
        };

        let dataset = match load_dataset(&config.dataset).await {
            Ok(dataset) => dataset.map(Arc::new),
            Err(e) => {
                warn!("continuing without dataset: {}", e);
                None
            }
        };

        let detector: Arc<dyn LanguageDetector> = Arc::new(ScriptDetector::new());
        let translator = Arc::new(
            Translator::new(generator.clone(), detector.clone())
                .with_quick_phrases(config.translate.quick_phrases),
        );
        let summarizer = Arc::new(Summarizer::new(generator.clone(), detector.clone()));

        let mut builder = ResponseResolver::builder()
            .phrases(phrases)
            .generative_fallback(config.chat.generative_fallback)
            .detector(detector)
            .translator(translator.clone())
            .summarizer(summarizer.clone());

        if config.chat.keyword_categories.unwrap_or(dataset.is_some()) {
            builder = builder.categories(CategoryReplies::builtin());
        }
        if let Some(dataset) = dataset {
            builder = builder.dataset(dataset);
        }
        if let Some(generator) = generator {
            builder = builder.generator(generator);
        }

        Ok(Self::new(builder.build(), translator, summarizer))
    }

    pub fn resolver(&self) -> &ResponseResolver {
        &self.resolver
    }

    /// One chat turn; both sides are recorded in `transcript`
    pub async fn chat<R: Rng + ?Sized>(
        &self,
        transcript: &mut Transcript,
        input: &str,
        rng: &mut R,
    ) -> String {
        transcript.push_user(input);
        let reply = self.resolver.resolve(input, rng).await;
        transcript.push_assistant(reply.clone());
        reply
    }

    /// Submit the text box for Translate or Summarize mode
    pub async fn run_task(&self, mode: Mode, text: &str) -> TaskOutcome {
        if mode == Mode::Chat {
            return TaskOutcome::Warning(CHAT_MODE_WARNING.to_string());
        }
        if text.trim().is_empty() {
            return TaskOutcome::Warning(EMPTY_TEXT_WARNING.to_string());
        }

        let body = match mode {
            Mode::Translate => self.translator.translate(text).await,
            _ => self.summarizer.summarize(text).await,
        };
        let title = mode.result_title().unwrap_or_default();
        TaskOutcome::Completed { title, body }
    }
}
