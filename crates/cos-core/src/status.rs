//! Environment status record produced by the scout and consumed by ULTP.

use crate::adapter::{AdapterKind, AdapterTarget};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Installation status of the context OS in a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvStatus {
    Active,
    NotInstalled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Relative OS root directory, when one was detected.
    #[serde(default)]
    pub os_root: Option<String>,
    pub status: EnvStatus,
    /// Operating on the scaffold's own source tree.
    #[serde(default)]
    pub is_dogfooding: bool,
}

impl Environment {
    pub fn active(os_root: impl Into<String>) -> Self {
        Self { os_root: Some(os_root.into()), status: EnvStatus::Active, is_dogfooding: false }
    }

    pub fn dogfooding() -> Self {
        Self { os_root: None, status: EnvStatus::Active, is_dogfooding: true }
    }

    pub fn not_installed() -> Self {
        Self { os_root: None, status: EnvStatus::NotInstalled, is_dogfooding: false }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelStatus {
    pub found: bool,
    #[serde(default)]
    pub path: Option<String>,
}

impl KernelStatus {
    pub fn found(path: impl Into<String>) -> Self {
        Self { found: true, path: Some(path.into()) }
    }

    pub fn missing() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterStatus {
    pub kind: AdapterKind,
    pub found: bool,
    #[serde(default)]
    pub points_to: Option<AdapterTarget>,
}

impl AdapterStatus {
    pub fn found(kind: AdapterKind, target: AdapterTarget) -> Self {
        Self { kind, found: true, points_to: Some(target) }
    }

    pub fn missing(kind: AdapterKind) -> Self {
        Self { kind, found: false, points_to: None }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStatus {
    pub found: bool,
}

/// Full environment status of a project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub environment: Environment,
    pub kernel: KernelStatus,
    pub adapters: Vec<AdapterStatus>,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub memory: Option<MemoryStatus>,
}

impl StatusRecord {
    /// A record with one not-found entry per known adapter.
    pub fn with_all_adapters_missing(environment: Environment, kernel: KernelStatus) -> Self {
        Self {
            environment,
            kernel,
            adapters: AdapterKind::ALL.into_iter().map(AdapterStatus::missing).collect(),
            skills: BTreeSet::new(),
            memory: None,
        }
    }

    /// Mark an adapter as found, replacing its existing entry.
    pub fn set_adapter(&mut self, status: AdapterStatus) {
        match self.adapters.iter_mut().find(|a| a.kind == status.kind) {
            Some(entry) => *entry = status,
            None => self.adapters.push(status),
        }
    }

    pub fn found_adapters(&self) -> impl Iterator<Item = &AdapterStatus> {
        self.adapters.iter().filter(|a| a.found)
    }

    pub fn memory_found(&self) -> bool {
        self.memory.map(|m| m.found).unwrap_or(false)
    }
}
