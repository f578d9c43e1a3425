//! Command-phrase interception for chat input
//!
//! Rules are checked in order; the first trigger prefix that matches the
//! normalized input decides the command.

use super::normalize::strip_trigger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Translate,
    Summarize,
}

impl CommandKind {
    /// Reply for a trigger phrase without any text after it
    pub fn instructions(&self) -> &'static str {
        match self {
            CommandKind::Translate => {
                "Sure! Just switch to Translate mode and provide the text you'd like to translate."
            }
            CommandKind::Summarize => {
                "Sure! Just switch to Summarize mode and provide the text you'd like summarized."
            }
        }
    }
}

/// A trigger-prefix rule
#[derive(Debug, Clone)]
pub struct CommandRule {
    pub kind: CommandKind,
    pub triggers: Vec<String>,
}

impl CommandRule {
    pub fn new(kind: CommandKind, triggers: &[&str]) -> Self {
        Self { kind, triggers: triggers.iter().map(|t| t.to_lowercase()).collect() }
    }
}

/// A recognized command with its payload (possibly empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub payload: String,
}

#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<CommandRule>,
}

impl IntentClassifier {
    pub fn new(rules: Vec<CommandRule>) -> Self {
        Self { rules }
    }

    /// Translate and summarize triggers, English and Telugu
    pub fn builtin() -> Self {
        Self::new(vec![
            CommandRule::new(CommandKind::Translate, &["can you translate", "భాష మార్చండి"]),
            CommandRule::new(CommandKind::Summarize, &["can you summarize", "సారాంశం ఇవ్వగలవా"]),
        ])
    }

    /// Classify input with leading punctuation removed (`text`) and its
    /// normalized form; the payload keeps trailing punctuation
    pub fn classify(&self, text: &str, normalized: &str) -> Option<Command> {
        self.rules.iter().find_map(|rule| {
            rule.triggers.iter().find_map(|trigger| {
                strip_trigger(text, normalized, trigger)
                    .map(|payload| Command { kind: rule.kind, payload: payload.to_string() })
            })
        })
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::normalize::{clean_start, normalize};

    fn classify(input: &str) -> Option<Command> {
        IntentClassifier::builtin().classify(clean_start(input), &normalize(input))
    }

    #[test]
    fn test_translate_triggers() {
        let command = classify("Can you translate I am hungry?").unwrap();
        assert_eq!(command.kind, CommandKind::Translate);
        assert_eq!(command.payload, "I am hungry?");

        let command = classify("భాష మార్చండి నాకు ఆకలిగా ఉంది").unwrap();
        assert_eq!(command.kind, CommandKind::Translate);
        assert_eq!(command.payload, "నాకు ఆకలిగా ఉంది");
    }

    #[test]
    fn test_summarize_trigger_with_empty_payload() {
        let command = classify("can you summarize   ").unwrap();
        assert_eq!(command.kind, CommandKind::Summarize);
        assert!(command.payload.is_empty());
        assert!(command.kind.instructions().contains("Summarize mode"));
    }

    #[test]
    fn test_trigger_must_be_prefix() {
        assert!(classify("please can you translate this").is_none());
        assert!(classify("hello").is_none());
    }
}
