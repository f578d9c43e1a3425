//! Prompt templates for the generation tasks

use super::types::{GenerationRequest, GenerationTask};
use crate::language::Language;

/// Prompt templates for translate, summarize and conversational fallback
pub struct PromptTemplates;

impl PromptTemplates {
    pub fn render(request: &GenerationRequest) -> String {
        match request.task {
            GenerationTask::Translate => Self::translation_prompt(
                request.source_language.unwrap_or(Language::English),
                request.target_language.unwrap_or(Language::Telugu),
                &request.payload,
            ),
            GenerationTask::Summarize => Self::summary_prompt(
                request.target_language.unwrap_or(Language::English),
                &request.payload,
            ),
            GenerationTask::Converse => Self::conversation_prompt(
                request.target_language.unwrap_or(Language::Telugu),
                &request.payload,
            ),
        }
    }

    pub fn translation_prompt(source: Language, target: Language, text: &str) -> String {
        format!("Translate the following text from {} to {}:\n{}", source.name(), target.name(), text)
    }

    pub fn summary_prompt(target: Language, text: &str) -> String {
        format!("Summarize the following text in {}:\n{}", target.name(), text)
    }

    pub fn conversation_prompt(language: Language, text: &str) -> String {
        format!("Respond to this in {} in a friendly, conversational way:\n{}", language.name(), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_prompt() {
        let request = GenerationRequest::translate(Language::Telugu, Language::English, "హలో");
        assert_eq!(request.prompt(), "Translate the following text from Telugu to English:\nహలో");
    }

    #[test]
    fn test_summary_and_conversation_prompts() {
        let request = GenerationRequest::summarize(Language::English, "some text");
        assert_eq!(request.prompt(), "Summarize the following text in English:\nsome text");

        let request = GenerationRequest::converse(Language::Telugu, "ఏం చేస్తున్నారు");
        assert!(request.prompt().starts_with("Respond to this in Telugu"));
        assert!(request.prompt().ends_with("\nఏం చేస్తున్నారు"));
    }
}
