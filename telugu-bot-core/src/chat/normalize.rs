//! Canonical form of user input used for every table lookup

const STRIP_CHARS: [char; 6] = ['?', '!', '.', '\'', ',', ' '];

/// Input stripped of surrounding punctuation, in original case
pub fn clean(input: &str) -> &str {
    input.trim_matches(|c| STRIP_CHARS.contains(&c))
}

/// Cleaned and lower-cased input
pub fn normalize(input: &str) -> String {
    clean(input).to_lowercase()
}

/// Input with only leading punctuation removed
pub fn clean_start(input: &str) -> &str {
    input.trim_start_matches(|c| STRIP_CHARS.contains(&c))
}

/// If `normalized` starts with `trigger`, return the rest of `text` (the
/// input after [`clean_start`]) following the trigger, whitespace-trimmed.
///
/// Case and trailing punctuation of the payload are kept. A remainder made
/// only of strippable characters counts as empty.
pub fn strip_trigger<'a>(text: &'a str, normalized: &str, trigger: &str) -> Option<&'a str> {
    if !normalized.starts_with(trigger) {
        return None;
    }

    let trigger_chars = trigger.chars().count();
    let offset = text
        .char_indices()
        .nth(trigger_chars)
        .map(|(index, _)| index)
        .unwrap_or(text.len());

    let rest = text[offset..].trim();
    Some(if clean(rest).is_empty() { "" } else { rest })
}
