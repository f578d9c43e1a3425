//! Request and response types for the generation collaborator

use super::prompts::PromptTemplates;
use crate::language::Language;
use serde::{Deserialize, Serialize};

/// What the generator is being asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationTask {
    Translate,
    Summarize,
    Converse,
}

/// A single request to the generation collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub task: GenerationTask,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<Language>,
    pub payload: String,
}

impl GenerationRequest {
    pub fn translate(source: Language, target: Language, payload: impl Into<String>) -> Self {
        Self {
            task: GenerationTask::Translate,
            source_language: Some(source),
            target_language: Some(target),
            payload: payload.into(),
        }
    }

    pub fn summarize(target: Language, payload: impl Into<String>) -> Self {
        Self {
            task: GenerationTask::Summarize,
            source_language: None,
            target_language: Some(target),
            payload: payload.into(),
        }
    }

    pub fn converse(language: Language, payload: impl Into<String>) -> Self {
        Self {
            task: GenerationTask::Converse,
            source_language: None,
            target_language: Some(language),
            payload: payload.into(),
        }
    }

    /// Render the natural-language prompt sent to the model
    pub fn prompt(&self) -> String {
        PromptTemplates::render(self)
    }
}

/// Response of the generation collaborator
///
/// `text` is `None` when the provider answered without any usable text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub text: Option<String>,
}

impl Generation {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }

    pub fn empty() -> Self {
        Self { text: None }
    }

    /// The text, if it contains anything besides whitespace
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_text() {
        assert_eq!(Generation::text("నమస్తే").usable_text(), Some("నమస్తే"));
        assert_eq!(Generation::text("  \n").usable_text(), None);
        assert_eq!(Generation::empty().usable_text(), None);
    }

    #[test]
    fn test_request_constructors() {
        let request = GenerationRequest::translate(Language::English, Language::Telugu, "hi");
        assert_eq!(request.task, GenerationTask::Translate);
        assert_eq!(request.source_language, Some(Language::English));
        assert_eq!(request.target_language, Some(Language::Telugu));

        let request = GenerationRequest::summarize(Language::Telugu, "long text");
        assert_eq!(request.source_language, None);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["task"], "summarize");
        assert_eq!(json["target_language"], "te");
        assert!(json.get("source_language").is_none());
    }
}
