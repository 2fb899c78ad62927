//! Known adapter files.
//!
//! The set is closed: every adapter the scaffold installs is listed in
//! [`AdapterKind::ALL`], and each carries the single-letter code used on the
//! ULTP wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Adapter identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AdapterKind {
    #[serde(rename = ".cursorrules")]
    Cursor,
    #[serde(rename = "CLAUDE.md")]
    Claude,
    #[serde(rename = "GEMINI.md")]
    Gemini,
}

impl AdapterKind {
    pub const ALL: [AdapterKind; 3] = [Self::Cursor, Self::Claude, Self::Gemini];

    /// File name of the adapter at the project root.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Cursor => ".cursorrules",
            Self::Claude => "CLAUDE.md",
            Self::Gemini => "GEMINI.md",
        }
    }

    /// ULTP code. Injective over [`AdapterKind::ALL`].
    pub fn code(&self) -> char {
        match self {
            Self::Cursor => 'C',
            Self::Claude => 'K',
            Self::Gemini => 'G',
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.file_name() == name)
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// What a found adapter points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterTarget {
    /// References one of the OS root directories.
    OsDir(String),
    /// Carries its own rules or points somewhere non-standard.
    Direct,
}

impl AdapterTarget {
    pub const DIRECT_LABEL: &'static str = "CORE/DIRECT";

    /// Resolve the target from adapter file content. OS directory names are
    /// tried in the given order.
    pub fn detect<S: AsRef<str>>(content: &str, os_dirs: &[S]) -> Self {
        os_dirs
            .iter()
            .map(AsRef::as_ref)
            .find(|dir| content.contains(dir))
            .map(|dir| Self::OsDir(dir.to_string()))
            .unwrap_or(Self::Direct)
    }
}

impl fmt::Display for AdapterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OsDir(dir) => f.write_str(dir),
            Self::Direct => f.write_str(Self::DIRECT_LABEL),
        }
    }
}
