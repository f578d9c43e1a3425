//! Keyword categories answered in the detected language

use crate::language::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Greeting,
    Identity,
}

/// Keywords and per-language replies of one category
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
    pub replies: HashMap<Language, Vec<String>>,
    /// Telugu default used when the language has no reply list
    pub default: Vec<String>,
}

impl CategoryRule {
    /// Any keyword occurs in the lower-cased raw input
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
    }

    pub fn replies_for(&self, language: Language) -> &[String] {
        self.replies
            .get(&language)
            .filter(|replies| !replies.is_empty())
            .unwrap_or(&self.default)
    }
}

/// Ordered category rules; the first matching category wins
#[derive(Debug, Clone, Default)]
pub struct CategoryReplies {
    rules: Vec<CategoryRule>,
}

impl CategoryReplies {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Greeting and identity categories
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// First category whose keywords occur in `raw`
    pub fn classify(&self, raw: &str) -> Option<&CategoryRule> {
        let lowered = raw.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

static BUILTIN: Lazy<CategoryReplies> = Lazy::new(|| {
    CategoryReplies::new(vec![
        CategoryRule {
            category: Category::Greeting,
            keywords: strings(&["hello", "hi", "హలో", "హాయ్"]),
            replies: HashMap::from([
                (
                    Language::Telugu,
                    strings(&[
                        "హాయ్! మీ రోజు ఎలా ఉంది?",
                        "హలో! మీరు ఎలా ఉన్నారు?",
                        "హలో! మీకు ఎలా సహాయం చేయగలను?",
                    ]),
                ),
                (Language::English, strings(&["Hi! How are you?", "Hello! How can I help you today?"])),
            ]),
            default: strings(&["హలో!"]),
        },
        CategoryRule {
            category: Category::Identity,
            keywords: strings(&["who are you", "నువ్వెవరు", "మీ పేరు ఏమిటి"]),
            replies: HashMap::from([
                (Language::Telugu, strings(&["నా పేరు తెలుగుబాట్!", "నేను తెలుగు చాట్ బాట్!"])),
                (Language::English, strings(&["My name is TeluguBot!", "I'm a Telugu chatbot!"])),
            ]),
            default: strings(&["నా పేరు తెలుగుబాట్!"]),
        },
    ])
});
