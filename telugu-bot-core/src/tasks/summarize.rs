//! Summaries in Telugu or English

use super::{SUMMARY_FAILED, generate_or_fallback};
use crate::language::{Language, LanguageDetector, detect_language};
use crate::llm::{GenerationRequest, TextGenerator};
use std::sync::Arc;
use tracing::debug;

const ENGLISH_OVERRIDES: [&str; 1] = ["summarize in english"];
const TELUGU_OVERRIDES: [&str; 2] = ["summarize in telugu", "సారాంశం ఇవ్వండి"];

pub struct Summarizer {
    generator: Option<Arc<dyn TextGenerator>>,
    detector: Arc<dyn LanguageDetector>,
}

impl Summarizer {
    pub fn new(
        generator: Option<Arc<dyn TextGenerator>>,
        detector: Arc<dyn LanguageDetector>,
    ) -> Self {
        Self { generator, detector }
    }

    /// Explicit request phrases win over detection
    pub fn target_language(&self, text: &str) -> Language {
        let lowered = text.to_lowercase();

        if ENGLISH_OVERRIDES.iter().any(|phrase| lowered.contains(phrase)) {
            Language::English
        } else if TELUGU_OVERRIDES.iter().any(|phrase| lowered.contains(phrase)) {
            Language::Telugu
        } else {
            detect_language(self.detector.as_ref(), text)
        }
    }

    /// Summarize `text`; never fails
    pub async fn summarize(&self, text: &str) -> String {
        let target = self.target_language(text);
        debug!("summarizing into {}", target.code());

        let request = GenerationRequest::summarize(target, text);
        generate_or_fallback(self.generator.as_ref(), &request, SUMMARY_FAILED).await
    }
}
