//! Telugu <-> English translation

use super::{TRANSLATION_FAILED, generate_or_fallback};
use crate::language::{Language, LanguageDetector, detect_language};
use crate::llm::{GenerationRequest, TextGenerator};
use std::sync::Arc;
use tracing::debug;

/// Common greetings answered without calling the generator
const QUICK_PHRASES: [(&str, &str); 6] = [
    ("hi", "హాయ్"),
    ("hello", "హలో"),
    ("how are you", "మీరు ఎలా ఉన్నారు?"),
    ("good morning", "శుభోదయం"),
    ("good evening", "శుభ సాయంత్రం"),
    ("bye", "వీడ్కోలు"),
];

pub struct Translator {
    generator: Option<Arc<dyn TextGenerator>>,
    detector: Arc<dyn LanguageDetector>,
    quick_phrases: bool,
}

impl Translator {
    pub fn new(
        generator: Option<Arc<dyn TextGenerator>>,
        detector: Arc<dyn LanguageDetector>,
    ) -> Self {
        Self { generator, detector, quick_phrases: false }
    }

    /// Enable the fixed greeting table
    pub fn with_quick_phrases(mut self, enabled: bool) -> Self {
        self.quick_phrases = enabled;
        self
    }

    /// Source and target: Telugu text goes to English, everything else to Telugu
    pub fn direction(&self, text: &str) -> (Language, Language) {
        let source = detect_language(self.detector.as_ref(), text);
        (source, source.counterpart())
    }

    fn quick_translation(&self, text: &str) -> Option<&'static str> {
        if !self.quick_phrases {
            return None;
        }
        let normalized = text.trim().to_lowercase();
        QUICK_PHRASES
            .iter()
            .find(|(phrase, _)| *phrase == normalized)
            .map(|(_, translation)| *translation)
    }

    /// Translate `text`; never fails
    pub async fn translate(&self, text: &str) -> String {
        if let Some(translation) = self.quick_translation(text) {
            debug!("quick translation for {:?}", text);
            return translation.to_string();
        }

        let (source, target) = self.direction(text);
        debug!("translating {} -> {}", source.code(), target.code());

        let request = GenerationRequest::translate(source, target, text);
        generate_or_fallback(self.generator.as_ref(), &request, TRANSLATION_FAILED).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::ScriptDetector;
    use crate::llm::mock::MockGenerator;
    use crate::llm::{Generation, LLMError};

    fn translator(mock: &MockGenerator) -> Translator {
        Translator::new(Some(Arc::new(mock.clone())), Arc::new(ScriptDetector::new()))
    }

    #[tokio::test]
    async fn test_english_goes_to_telugu() {
        let mock = MockGenerator::replying("నాకు ఆకలిగా ఉంది");
        let reply = translator(&mock).translate("I am hungry").await;

        assert_eq!(reply, "నాకు ఆకలిగా ఉంది");
        let history = mock.call_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].source_language, Some(Language::English));
        assert_eq!(history[0].target_language, Some(Language::Telugu));
        assert_eq!(history[0].payload, "I am hungry");
    }

    #[tokio::test]
    async fn test_telugu_goes_to_english() {
        let mock = MockGenerator::replying("I am hungry");
        translator(&mock).translate("నాకు ఆకలిగా ఉంది").await;

        let history = mock.call_history();
        assert_eq!(history[0].source_language, Some(Language::Telugu));
        assert_eq!(history[0].target_language, Some(Language::English));
    }

    #[tokio::test]
    async fn test_failures_become_messages() {
        let mock = MockGenerator::new();
        mock.add_response(Generation::empty());
        assert_eq!(translator(&mock).translate("hello").await, TRANSLATION_FAILED);

        let mock = MockGenerator::new();
        mock.add_error(LLMError::network("connection refused"));
        let reply = translator(&mock).translate("hello").await;
        assert_eq!(reply, "దోషం: Network error: connection refused");
    }

    #[tokio::test]
    async fn test_without_generator() {
        let translator = Translator::new(None, Arc::new(ScriptDetector::new()));
        let reply = translator.translate("hello").await;
        assert!(reply.starts_with("దోషం: Configuration error"));
    }

    #[tokio::test]
    async fn test_quick_phrases() {
        let mock = MockGenerator::new();
        let translator = translator(&mock).with_quick_phrases(true);

        assert_eq!(translator.translate(" Good Morning ").await, "శుభోదయం");
        assert_eq!(mock.call_count(), 0);

        translator.translate("good night").await;
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_any_length_returns_text() {
        let mock = MockGenerator::new();
        let translator = translator(&mock);
        let long = "a".repeat(10_000);

        for input in ["", "x", long.as_str()] {
            assert!(!translator.translate(input).await.is_empty());
        }
    }
}
