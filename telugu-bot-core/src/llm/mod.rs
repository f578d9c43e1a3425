//! Generation collaborator integration
//!
//! Translation, summarization and the conversational fallback all reach an
//! external generative model through the [`TextGenerator`] trait. The only
//! production implementation talks to Google Gemini over REST.

pub mod errors;
pub mod gemini;
pub mod mock;
pub mod prompts;
pub mod traits;
pub mod types;

pub use errors::LLMError;
pub use gemini::GeminiGenerator;
pub use prompts::PromptTemplates;
pub use traits::TextGenerator;
pub use types::{Generation, GenerationRequest, GenerationTask};
