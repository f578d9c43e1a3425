//! Fast local language detection without a model

use super::LanguageDetector;

/// Heuristic detector that scores alphabetic characters by Unicode script
///
/// Latin text is reported as English, which is also how romanized Telugu
/// ("meeru ela unnaru") ends up being treated.
#[derive(Debug, Clone, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    fn script_code(c: char) -> Option<&'static str> {
        let code = match c as u32 {
            0x0C00..=0x0C7F => "te",
            0x0900..=0x097F => "hi",
            0x0980..=0x09FF => "bn",
            0x0B80..=0x0BFF => "ta",
            0x0C80..=0x0CFF => "kn",
            0x0D00..=0x0D7F => "ml",
            0x0600..=0x06FF => "ar",
            0x0400..=0x04FF => "ru",
            0x4E00..=0x9FFF => "zh",
            _ if c.is_ascii_alphabetic() => "en",
            0x00C0..=0x024F => "en",
            _ => return None,
        };
        Some(code)
    }
}

impl LanguageDetector for ScriptDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let mut scores: Vec<(&'static str, usize)> = Vec::new();

        for c in text.chars() {
            let Some(code) = Self::script_code(c) else {
                continue;
            };
            match scores.iter_mut().find(|(seen, _)| *seen == code) {
                Some((_, count)) => *count += 1,
                None => scores.push((code, 1)),
            }
        }

        let mut best_match = None;
        let mut best_score = 0;
        for (code, score) in scores {
            if score > best_score {
                best_score = score;
                best_match = Some(code.to_string());
            }
        }

        best_match
    }
}
