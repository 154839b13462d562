//! Voice formatters: tone labels and language tags applied to generated copy.
//! No translation happens here; a non-English language only gets a bracketed tag.

/// Tone used when the caller sends none (or an empty string).
pub const DEFAULT_TONE: &str = "friendly";

/// Language used when the caller sends none (or an empty string).
pub const DEFAULT_LANGUAGE: &str = "en";

const TONE_LABELS: &[(&str, &str)] = &[
    ("friendly", "Friendly"),
    ("confident", "Confident"),
    ("professional", "Professional"),
    ("casual", "Casual"),
    ("warm", "Warm"),
    ("persuasive", "Persuasive"),
];

const LANGUAGE_TAGS: &[(&str, &str)] = &[
    ("es", "[ES] "),
    ("fr", "[FR] "),
    ("de", "[DE] "),
    ("pt", "[PT] "),
];

/// Display label for a tone. Known tones map to a fixed label; anything else
/// is capitalized as-is.
pub fn tone_prefix(tone: &str) -> String {
    let t = if tone.is_empty() {
        DEFAULT_TONE.to_string()
    } else {
        tone.to_lowercase()
    };
    TONE_LABELS
        .iter()
        .find(|(key, _)| *key == t)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| capitalize(&t))
}

/// Prepends a language tag to `text`. English (or an empty code) passes through.
pub fn apply_language(text: &str, language: &str) -> String {
    let code = language.to_lowercase();
    if matches!(code.as_str(), "" | "en" | "english") {
        return text.to_string();
    }
    let prefix = LANGUAGE_TAGS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, tag)| (*tag).to_string())
        .unwrap_or_else(|| format!("[{}] ", language.to_uppercase()));
    prefix + text
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Title-cases every word. A word is a run of cased characters (upper- or
/// lower-case); anything else, CJK letters included, ends it.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && in_word {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = cased;
    }
    out
}

/// Returns `value` unless it is absent or empty, in which case `fallback`.
pub(crate) fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback)
}
