//! Chat mode: normalization, reply tables and the tiered resolver

pub mod categories;
pub mod intent;
pub mod normalize;
pub mod phrases;
pub mod resolver;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use categories::{Category, CategoryReplies, CategoryRule};
pub use intent::{Command, CommandKind, CommandRule, IntentClassifier};
pub use phrases::{PhraseError, PhraseTable};
pub use resolver::{APOLOGY, ReplySource, Resolution, ResolverBuilder, ResponseResolver};
pub use transcript::{ConversationEntry, Role, Transcript};
