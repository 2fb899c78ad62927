//! Fixed rule tables.

/// Marker opening a markup comment line.
pub const COMMENT_OPENER: &str = "<!--";

pub const H1_MARKER: &str = "# ";
pub const H2_MARKER: &str = "## ";
pub const BULLET_MARKERS: &[&str] = &["- ", "* "];
pub const DIRECTIVE_PREFIX: char = '!';

/// Throwaway openers; a line starting with one (case-insensitive) is noise.
pub const FLUFF_OPENERS: &[&str] = &[
    "the goal",
    "this file",
    "welcome",
    "our objective",
    "it is important",
];

/// Words removed as whole words, case-insensitive.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "please", "ensure", "that", "you", "should",
    "make", "sure", "to", "is", "are", "of", "in", "with",
];

/// Keyword → short code, applied in this order, case-insensitive.
pub const DIRECTIVE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("must", "!"),
    ("mandatory", "!!"),
    ("violation", "ERR"),
    ("requirement", "REQ"),
];
