//! Translate and summarize tasks
//!
//! Both tasks delegate to the generation collaborator and never fail: a
//! missing answer or an error is turned into a localized message.

pub mod summarize;
pub mod translate;

pub use summarize::Summarizer;
pub use translate::Translator;

use crate::llm::{Generation, GenerationRequest, LLMError, TextGenerator};
use std::sync::Arc;
use tracing::warn;

/// Reply when the generator returns no translation text
pub const TRANSLATION_FAILED: &str = "అనువాదం విఫలమైంది.";

/// Reply when the generator returns no summary text
pub const SUMMARY_FAILED: &str = "సారాంశం విఫలమైంది.";

/// Localized "Error: ..." message
pub fn error_message(error: &LLMError) -> String {
    format!("దోషం: {error}")
}

/// Run one request, or report the missing generator as a configuration error
async fn generate(
    generator: Option<&Arc<dyn TextGenerator>>,
    request: &GenerationRequest,
) -> Result<Generation, LLMError> {
    let Some(generator) = generator else {
        return Err(LLMError::config("no text generator is configured"));
    };
    generator.generate(request).await
}

/// Verbatim text, `empty_reply` for no usable text, or the error message
async fn generate_or_fallback(
    generator: Option<&Arc<dyn TextGenerator>>,
    request: &GenerationRequest,
    empty_reply: &str,
) -> String {
    match generate(generator, request).await {
        Ok(generation) => match generation.usable_text() {
            Some(text) => text.to_string(),
            None => {
                warn!(task = ?request.task, "generator returned no text");
                empty_reply.to_string()
            }
        },
        Err(e) => {
            warn!(task = ?request.task, "generation failed: {}", e);
            error_message(&e)
        }
    }
}
