//! Segment tags and single-letter codes.

use cos_core::{EnvStatus, Environment};
use serde::{Deserialize, Serialize};

pub const TAG_OS: &str = "OS";
pub const TAG_KERNEL: &str = "L0";
pub const TAG_KERNEL_PATH: &str = "P";
pub const TAG_ADAPTERS: &str = "L1";
pub const TAG_SKILLS: &str = "L2";
pub const TAG_MEMORY: &str = "M";

pub const PRESENT: char = 'V';
pub const ABSENT: char = 'X';
pub const LIST_SEPARATOR: char = ',';

/// Environment code carried in the `OS` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvCode {
    Active,
    NotInstalled,
    Dogfooding,
}

impl EnvCode {
    pub const ALL: [EnvCode; 3] = [Self::Active, Self::NotInstalled, Self::Dogfooding];

    /// Dogfooding wins over the install status.
    pub fn of(env: &Environment) -> Self {
        if env.is_dogfooding {
            Self::Dogfooding
        } else if env.status == EnvStatus::Active {
            Self::Active
        } else {
            Self::NotInstalled
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Active => 'A',
            Self::NotInstalled => 'N',
            Self::Dogfooding => 'D',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_char() == c)
    }
}

pub fn flag(present: bool) -> char {
    if present { PRESENT } else { ABSENT }
}

pub fn parse_flag(s: &str) -> Option<bool> {
    match s {
        "V" => Some(true),
        "X" => Some(false),
        _ => None,
    }
}

/// Split a comma list; an empty segment is an empty list.
pub fn split_list(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(LIST_SEPARATOR).map(str::to_string).collect()
}
