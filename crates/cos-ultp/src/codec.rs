//! ULTP encode / validate / decode.

use crate::segment::{
    flag, parse_flag, split_list, EnvCode, ABSENT, LIST_SEPARATOR, PRESENT, TAG_ADAPTERS, TAG_KERNEL,
    TAG_KERNEL_PATH, TAG_MEMORY, TAG_OS, TAG_SKILLS,
};
use cos_core::{AdapterKind, StatusRecord};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Anchored frame grammar. Opaque fields may not close their bracket or
/// break the line; the adapter alphabet comes from [`AdapterKind`].
static FRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    let envs: String = EnvCode::ALL.iter().map(EnvCode::as_char).collect();
    let codes: String = AdapterKind::ALL.iter().map(AdapterKind::code).collect();
    let flags = format!("{PRESENT}{ABSENT}");
    let opaque = r"[^\]\r\n]*";
    let pattern = format!(
        r"^\[{TAG_OS}:([{envs}])\]\[{TAG_KERNEL}:([{flags}]);{TAG_KERNEL_PATH}:({opaque})\]\[{TAG_ADAPTERS}:([{codes}{LIST_SEPARATOR}]*)\]\[{TAG_SKILLS}:({opaque})\]\[{TAG_MEMORY}:([{flags}])\]$"
    );
    Regex::new(&pattern).unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedKernel {
    pub found: bool,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedMemory {
    pub found: bool,
}

/// Structured view of a valid frame.
///
/// `adapters` holds the raw wire codes. The frame does not carry adapter
/// names, so none are reconstructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedState {
    pub os: EnvCode,
    pub kernel: DecodedKernel,
    pub adapters: Vec<String>,
    pub skills: Vec<String>,
    pub memory: DecodedMemory,
}

fn join_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(LIST_SEPARATOR);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Encode a status record into a ULTP frame.
///
/// Adapter codes and skills are emitted in ascending order, so the output
/// does not depend on input ordering.
pub fn encode(state: &StatusRecord) -> String {
    let env = EnvCode::of(&state.environment).as_char();
    let kernel = flag(state.kernel.found);
    let path = state.kernel.path.as_deref().unwrap_or("");
    let codes: BTreeSet<char> = state.found_adapters().map(|a| a.kind.code()).collect();
    let adapters = join_list(codes.iter().map(char::to_string));
    let skills = join_list(&state.skills);
    let memory = flag(state.memory_found());

    let frame = format!(
        "[{TAG_OS}:{env}][{TAG_KERNEL}:{kernel};{TAG_KERNEL_PATH}:{path}][{TAG_ADAPTERS}:{adapters}][{TAG_SKILLS}:{skills}][{TAG_MEMORY}:{memory}]"
    );
    tracing::trace!(len = frame.len(), "encoded ULTP frame");
    frame
}

/// Whether `input` is exactly one well-formed frame.
pub fn validate(input: &str) -> bool {
    FRAME_RE.is_match(input)
}

/// Decode a frame. Returns `None` for anything [`validate`] rejects.
pub fn decode(input: &str) -> Option<DecodedState> {
    let Some(caps) = FRAME_RE.captures(input) else {
        tracing::debug!(input, "rejected malformed ULTP frame");
        return None;
    };

    let os = caps[1].chars().next().and_then(EnvCode::from_char)?;
    let path = &caps[3];

    Some(DecodedState {
        os,
        kernel: DecodedKernel {
            found: parse_flag(&caps[2])?,
            path: (!path.is_empty()).then(|| path.to_string()),
        },
        adapters: split_list(&caps[4]),
        skills: split_list(&caps[5]),
        memory: DecodedMemory { found: parse_flag(&caps[6])? },
    })
}
