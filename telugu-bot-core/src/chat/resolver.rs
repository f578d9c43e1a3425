//! Tiered reply resolution for chat input
//!
//! Tiers, first non-empty candidate set wins:
//!
//! ```text
//! command trigger -> dataset containment -> keyword category
//!     -> phrase table -> generator -> apology
//! ```
//!
//! The resolver holds no mutable state. Randomness comes from the caller so
//! a seeded RNG makes resolution reproducible.

use super::categories::CategoryReplies;
use super::intent::{CommandKind, IntentClassifier};
use super::normalize::{clean_start, normalize};
use super::phrases::PhraseTable;
use crate::dataset::Dataset;
use crate::language::{Language, LanguageDetector, ScriptDetector, detect_language};
use crate::llm::{GenerationRequest, TextGenerator};
use crate::tasks::{Summarizer, Translator};
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reply when nothing else produced an answer
pub const APOLOGY: &str = "క్షమించండి, నేను అర్థం చేసుకోలేకపోయాను!";

/// Inputs this short are assumed to be Telugu without running detection
const SHORT_INPUT_CHARS: usize = 3;

/// Which tier produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Command,
    Dataset,
    Category,
    Phrase,
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub reply: String,
    pub source: ReplySource,
}

impl Resolution {
    fn new(reply: impl Into<String>, source: ReplySource) -> Self {
        Self { reply: reply.into(), source }
    }
}

pub struct ResponseResolver {
    intents: IntentClassifier,
    phrases: PhraseTable,
    categories: Option<CategoryReplies>,
    dataset: Option<Arc<Dataset>>,
    generator: Option<Arc<dyn TextGenerator>>,
    generative_fallback: bool,
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<Translator>,
    summarizer: Arc<Summarizer>,
}

impl ResponseResolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Resolve raw user text to a reply; never fails
    pub async fn resolve<R: Rng + ?Sized>(&self, raw: &str, rng: &mut R) -> String {
        self.resolve_detailed(raw, rng).await.reply
    }

    /// Like [`resolve`](Self::resolve), also reporting the winning tier
    pub async fn resolve_detailed<R: Rng + ?Sized>(&self, raw: &str, rng: &mut R) -> Resolution {
        let normalized = normalize(raw);

        let resolution = if let Some(command) = self.intents.classify(clean_start(raw), &normalized) {
            let reply = match (command.kind, command.payload.is_empty()) {
                (kind, true) => kind.instructions().to_string(),
                (CommandKind::Translate, false) => self.translator.translate(&command.payload).await,
                (CommandKind::Summarize, false) => self.summarizer.summarize(&command.payload).await,
            };
            Resolution::new(reply, ReplySource::Command)
        } else if let Some(reply) = self.from_dataset(&normalized, rng) {
            Resolution::new(reply, ReplySource::Dataset)
        } else if let Some(reply) = self.from_categories(raw, rng) {
            Resolution::new(reply, ReplySource::Category)
        } else if let Some(reply) = self.from_phrases(&normalized, rng) {
            Resolution::new(reply, ReplySource::Phrase)
        } else {
            self.from_generator(raw).await
        };

        debug!(source = ?resolution.source, "resolved chat input");
        resolution
    }

    /// Language used for category replies and the generated fallback
    pub fn chat_language(&self, raw: &str) -> Language {
        if raw.chars().count() <= SHORT_INPUT_CHARS {
            Language::Telugu
        } else {
            detect_language(self.detector.as_ref(), raw)
        }
    }

    fn from_dataset<R: Rng + ?Sized>(&self, normalized: &str, rng: &mut R) -> Option<String> {
        let dataset = self.dataset.as_ref()?;
        let candidates = dataset.matching_outputs(normalized);
        if !candidates.is_empty() {
            debug!("{} dataset candidates", candidates.len());
        }
        candidates.choose(rng).map(|output| output.to_string())
    }

    fn from_categories<R: Rng + ?Sized>(&self, raw: &str, rng: &mut R) -> Option<String> {
        let rule = self.categories.as_ref()?.classify(raw)?;
        let language = self.chat_language(raw);
        rule.replies_for(language).choose(rng).cloned()
    }

    fn from_phrases<R: Rng + ?Sized>(&self, normalized: &str, rng: &mut R) -> Option<String> {
        let mut reply = self.phrases.lookup(normalized)?.choose(rng)?.clone();

        if let Some(question) =
            self.phrases.follow_up_for(normalized).and_then(|questions| questions.choose(rng))
        {
            reply.push_str("\n\n");
            reply.push_str(question);
        }

        Some(reply)
    }

    async fn from_generator(&self, raw: &str) -> Resolution {
        let generator = match &self.generator {
            Some(generator) if self.generative_fallback => generator,
            _ => return Resolution::new(APOLOGY, ReplySource::Fallback),
        };

        let request = GenerationRequest::converse(self.chat_language(raw), raw);
        match generator.generate(&request).await {
            Ok(generation) => match generation.usable_text() {
                Some(text) => Resolution::new(text, ReplySource::Generated),
                None => {
                    warn!("generator returned no conversational reply");
                    Resolution::new(APOLOGY, ReplySource::Fallback)
                }
            },
            Err(e) => {
                warn!("conversational fallback failed: {}", e);
                Resolution::new(APOLOGY, ReplySource::Fallback)
            }
        }
    }
}

/// Builder for [`ResponseResolver`]
///
/// Unset parts default to: built-in phrase table, no dataset, no keyword
/// categories, no generator, [`ScriptDetector`].
pub struct ResolverBuilder {
    intents: IntentClassifier,
    phrases: Option<PhraseTable>,
    categories: Option<CategoryReplies>,
    dataset: Option<Arc<Dataset>>,
    generator: Option<Arc<dyn TextGenerator>>,
    generative_fallback: bool,
    detector: Option<Arc<dyn LanguageDetector>>,
    translator: Option<Arc<Translator>>,
    summarizer: Option<Arc<Summarizer>>,
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self {
            intents: IntentClassifier::builtin(),
            phrases: None,
            categories: None,
            dataset: None,
            generator: None,
            generative_fallback: true,
            detector: None,
            translator: None,
            summarizer: None,
        }
    }
}

impl ResolverBuilder {
    pub fn intents(mut self, intents: IntentClassifier) -> Self {
        self.intents = intents;
        self
    }

    pub fn phrases(mut self, phrases: PhraseTable) -> Self {
        self.phrases = Some(phrases);
        self
    }

    pub fn categories(mut self, categories: CategoryReplies) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn dataset(mut self, dataset: Arc<Dataset>) -> Self {
        self.dataset = Some(dataset);
        self
    }

    pub fn generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn generative_fallback(mut self, enabled: bool) -> Self {
        self.generative_fallback = enabled;
        self
    }

    pub fn detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn translator(mut self, translator: Arc<Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn summarizer(mut self, summarizer: Arc<Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn build(self) -> ResponseResolver {
        let detector: Arc<dyn LanguageDetector> = match self.detector {
            Some(detector) => detector,
            None => Arc::new(ScriptDetector::new()),
        };

        let translator = self.translator.unwrap_or_else(|| {
            Arc::new(Translator::new(self.generator.clone(), detector.clone()))
        });
        let summarizer = self.summarizer.unwrap_or_else(|| {
            Arc::new(Summarizer::new(self.generator.clone(), detector.clone()))
        });

        ResponseResolver {
            intents: self.intents,
            phrases: self.phrases.unwrap_or_else(PhraseTable::builtin),
            categories: self.categories,
            dataset: self.dataset,
            generator: self.generator,
            generative_fallback: self.generative_fallback,
            detector,
            translator,
            summarizer,
        }
    }
}
