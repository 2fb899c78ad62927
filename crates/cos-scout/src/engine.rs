//! Filesystem detection.

use cos_core::error::{CosError, Result};
use cos_core::{
    is_frame_safe, AdapterKind, AdapterStatus, AdapterTarget, Environment, KernelStatus, LayoutConfig, MemoryStatus, StatusRecord,
};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Detects OS root, kernel, adapters, skills and memory under `root`.
pub struct ScoutEngine {
    root: PathBuf,
    layout: LayoutConfig,
}

impl ScoutEngine {
    pub fn new(root: impl Into<PathBuf>, layout: LayoutConfig) -> Self {
        Self { root: root.into(), layout }
    }

    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self::new(root, LayoutConfig::default())
    }

    /// First configured OS directory present under the root.
    pub fn detect_active_os_dir(&self) -> Option<String> {
        self.layout.os_dirs.iter().find(|dir| self.root.join(dir).exists()).cloned()
    }

    /// Whether the root is the scaffold's own source tree, judged by the
    /// `name` in `package.json`. Unreadable or malformed manifests count as no.
    pub fn is_source_repo(&self) -> bool {
        let manifest = self.root.join("package.json");
        let Ok(raw) = std::fs::read_to_string(&manifest) else {
            return false;
        };
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => value.get("name").and_then(|n| n.as_str()) == Some(self.layout.source_package_name.as_str()),
            Err(e) => {
                tracing::debug!(path = %manifest.display(), error = %e, "unparseable package.json");
                false
            }
        }
    }

    /// Kernel inside the active OS dir, otherwise at the root.
    pub fn kernel_status(&self, active: Option<&str>) -> KernelStatus {
        let rel = match active {
            Some(dir) => format!("{dir}/{}", self.layout.kernel_file),
            None => self.layout.kernel_file.clone(),
        };
        if self.root.join(&rel).is_file() {
            KernelStatus::found(rel)
        } else {
            KernelStatus::missing()
        }
    }

    /// One entry per known adapter, in [`AdapterKind::ALL`] order.
    pub fn adapter_status(&self) -> Result<Vec<AdapterStatus>> {
        AdapterKind::ALL
            .into_iter()
            .map(|kind| {
                let path = self.root.join(kind.file_name());
                match std::fs::read(&path) {
                    Ok(bytes) => {
                        let content = String::from_utf8_lossy(&bytes);
                        let target = AdapterTarget::detect(&content, self.layout.os_dirs.as_slice());
                        tracing::debug!(adapter = %kind, target = %target, "found adapter");
                        Ok(AdapterStatus::found(kind, target))
                    }
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(AdapterStatus::missing(kind)),
                    Err(e) => Err(CosError::io(&path, e)),
                }
            })
            .collect()
    }

    /// Skill names from the skills directory. A missing directory yields
    /// an empty set. Names that cannot travel in a ULTP frame are skipped.
    pub fn skills(&self, active: Option<&str>) -> Result<BTreeSet<String>> {
        let dir = self.scoped(active, &self.layout.skills_dir);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => return Err(CosError::io(&dir, e)),
        };

        let mut skills = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| CosError::io(&dir, e))?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name == self.layout.skill_index {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.layout.skill_extension.as_str()) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !is_frame_safe(stem) {
                tracing::warn!(path = %path.display(), "skipping skill with reserved characters in its name");
                continue;
            }
            skills.insert(stem.to_string());
        }
        Ok(skills)
    }

    pub fn memory_status(&self, active: Option<&str>) -> MemoryStatus {
        MemoryStatus { found: self.scoped(active, &self.layout.memory_dir).is_dir() }
    }

    /// Build the full status record.
    pub fn scan(&self) -> Result<StatusRecord> {
        let active = self.detect_active_os_dir();
        let environment = match &active {
            Some(dir) => Environment::active(dir.clone()),
            None if self.is_source_repo() => Environment::dogfooding(),
            None => Environment::not_installed(),
        };
        let active = active.as_deref();

        let record = StatusRecord {
            environment,
            kernel: self.kernel_status(active),
            adapters: self.adapter_status()?,
            skills: self.skills(active)?,
            memory: Some(self.memory_status(active)),
        };
        tracing::info!(
            root = %self.root.display(),
            status = ?record.environment.status,
            skills = record.skills.len(),
            "scan complete"
        );
        Ok(record)
    }

    fn scoped(&self, active: Option<&str>, name: &str) -> PathBuf {
        match active {
            Some(dir) => self.root.join(dir).join(name),
            None => self.root.join(name),
        }
    }
}
