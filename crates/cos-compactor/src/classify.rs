//! Per-line classification.

use crate::rules::{BULLET_MARKERS, COMMENT_OPENER, DIRECTIVE_PREFIX, FLUFF_OPENERS, H1_MARKER, H2_MARKER};
use regex::Regex;
use std::sync::LazyLock;

static RE_FLUFF: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = FLUFF_OPENERS.iter().map(|p| regex::escape(p)).collect();
    Regex::new(&format!("(?i)^(?:{})", alternatives.join("|"))).unwrap()
});

/// What a single input line is. Borrowed variants hold the text after the
/// marker has been stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Fluff,
    Heading1(&'a str),
    Heading2(&'a str),
    Bullet(&'a str),
    Statement(&'a str),
}

impl LineKind<'_> {
    pub fn is_dropped(&self) -> bool {
        matches!(self, Self::Blank | Self::Comment | Self::Fluff)
    }

    /// Compact form of the line, or `None` for dropped lines.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Blank | Self::Comment | Self::Fluff => None,
            Self::Heading1(text) | Self::Heading2(text) => Some(format!("[{}]", text.to_uppercase())),
            Self::Bullet(text) => Some(format!("{DIRECTIVE_PREFIX}{text}")),
            Self::Statement(text) => Some((*text).to_string()),
        }
    }
}

/// Classify one raw line. The line is trimmed first.
///
/// The level-2 marker is tested before the level-1 marker; first match wins.
pub fn classify_line(raw: &str) -> LineKind<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with(COMMENT_OPENER) {
        return LineKind::Comment;
    }
    if RE_FLUFF.is_match(line) {
        return LineKind::Fluff;
    }
    if let Some(rest) = line.strip_prefix(H2_MARKER) {
        return LineKind::Heading2(rest);
    }
    if let Some(rest) = line.strip_prefix(H1_MARKER) {
        return LineKind::Heading1(rest);
    }
    if let Some(rest) = BULLET_MARKERS.iter().find_map(|m| line.strip_prefix(m)) {
        return LineKind::Bullet(rest);
    }
    LineKind::Statement(line)
}
