//! Text-shrinking passes applied to the joined line stream.

use crate::rules::{DIRECTIVE_SUBSTITUTIONS, STOPWORDS};
use regex::Regex;
use std::sync::LazyLock;

static RE_STOPWORDS: LazyLock<Regex> = LazyLock::new(|| {
    let words: Vec<String> = STOPWORDS.iter().map(|w| regex::escape(w)).collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", words.join("|"))).unwrap()
});
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s").unwrap());

/// Case-insensitive keyword matchers. Keywords are replaced wherever they
/// occur, including inside longer words (`mustn't` → `!n't`).
static DIRECTIVE_PAIRS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    DIRECTIVE_SUBSTITUTIONS
        .iter()
        .map(|(keyword, code)| {
            let pattern = format!("(?i){}", regex::escape(keyword));
            (Regex::new(&pattern).unwrap(), *code)
        })
        .collect()
});

pub fn strip_stopwords(text: &str) -> String {
    RE_STOPWORDS.replace_all(text, "").into_owned()
}

pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").into_owned()
}

/// Drop the period of every period-whitespace pair.
pub fn collapse_sentence_breaks(text: &str) -> String {
    RE_SENTENCE_BREAK.replace_all(text, " ").into_owned()
}

pub fn map_directives(text: &str) -> String {
    let mut result = text.to_string();
    for (re, code) in DIRECTIVE_PAIRS.iter() {
        result = re.replace_all(&result, *code).into_owned();
    }
    result
}

/// All passes, in order.
pub fn shrink(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut result = strip_stopwords(text);
    result = collapse_whitespace(&result);
    result = collapse_sentence_breaks(&result);
    result = map_directives(&result);
    result.trim().to_string()
}
