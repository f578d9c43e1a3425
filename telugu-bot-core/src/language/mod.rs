//! Language tags and the detection policy shared by chat and tasks
//!
//! Only Telugu and English are modelled. Whatever a detector reports outside
//! those two codes is treated as unreliable and replaced by an ASCII check.

pub mod detector;

pub use detector::ScriptDetector;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported conversation languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Telugu => "te",
            Language::English => "en",
        }
    }

    /// English name, as used inside generator prompts
    pub fn name(&self) -> &'static str {
        match self {
            Language::Telugu => "Telugu",
            Language::English => "English",
        }
    }

    /// The other supported language
    pub fn counterpart(&self) -> Language {
        match self {
            Language::Telugu => Language::English,
            Language::English => Language::Telugu,
        }
    }

    /// Parse a detector code; only `te` and `en` are accepted
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "te" => Some(Language::Telugu),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// All code points below 128 means English, anything else Telugu
    pub fn from_ascii_heuristic(text: &str) -> Language {
        if text.chars().all(|c| (c as u32) < 128) {
            Language::English
        } else {
            Language::Telugu
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Short-text language detector collaborator
///
/// Implementations return a best-effort language code, or `None` when they
/// cannot decide. Callers must not trust codes outside `te`/`en`.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Option<String>;
}

/// Detect the language of `text`, overriding unreliable detector output
pub fn detect_language(detector: &dyn LanguageDetector, text: &str) -> Language {
    match detector.detect(text).as_deref().and_then(Language::from_code) {
        Some(language) => language,
        None => {
            let language = Language::from_ascii_heuristic(text);
            tracing::trace!("detector undecided, ascii heuristic chose {}", language.code());
            language
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDetector(Option<&'static str>);

    impl LanguageDetector for FixedDetector {
        fn detect(&self, _text: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_trusted_codes_pass_through() {
        let detector = FixedDetector(Some("te"));
        assert_eq!(detect_language(&detector, "hello"), Language::Telugu);

        let detector = FixedDetector(Some("en"));
        assert_eq!(detect_language(&detector, "నమస్తే"), Language::English);
    }

    #[test]
    fn test_unsupported_code_uses_ascii_heuristic() {
        let detector = FixedDetector(Some("so"));
        assert_eq!(detect_language(&detector, "hi there"), Language::English);
        assert_eq!(detect_language(&detector, "హాయ్"), Language::Telugu);

        let undecided = FixedDetector(None);
        assert_eq!(detect_language(&undecided, ""), Language::English);
        assert_eq!(detect_language(&undecided, "café"), Language::Telugu);
    }

    #[test]
    fn test_codes_and_names() {
        assert_eq!(Language::from_code(" EN "), Some(Language::English));
        assert_eq!(Language::from_code("hi"), None);
        assert_eq!(Language::Telugu.counterpart(), Language::English);
        assert_eq!(Language::English.to_string(), "English");
    }
}
