use crate::error::{CosError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Characters that would break a ULTP frame field or list.
pub const FRAME_RESERVED: [char; 4] = [']', ',', '\r', '\n'];

/// Whether `value` can be carried in a ULTP frame unchanged.
pub fn is_frame_safe(value: &str) -> bool {
    !value.contains(FRAME_RESERVED)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CosConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Where the scaffold's pieces live inside a project directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Candidate OS root directories, in detection order.
    pub os_dirs: Vec<String>,
    pub kernel_file: String,
    pub skills_dir: String,
    pub skill_extension: String,
    /// Index file inside the skills directory that is not itself a skill.
    pub skill_index: String,
    pub memory_dir: String,
    /// `package.json` name that marks the scaffold's own source tree.
    pub source_package_name: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            os_dirs: vec![".ai-context-os".into(), ".local-os".into()],
            kernel_file: "PROJECT_OS.md".into(),
            skills_dir: "skills".into(),
            skill_extension: "md".into(),
            skill_index: "README.md".into(),
            memory_dir: "memory".into(),
            source_package_name: "ai-context-os".into(),
        }
    }
}

impl CosConfig {
    /// Parse a JSON config document. Missing sections fall back to defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CosError::io(path, e))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if layout.os_dirs.iter().any(|d| d.trim().is_empty()) {
            return Err(CosError::Config("os_dirs entries must be non-empty".into()));
        }
        if layout.kernel_file.trim().is_empty() {
            return Err(CosError::Config("kernel_file must be non-empty".into()));
        }
        if layout.skills_dir.trim().is_empty() {
            return Err(CosError::Config("skills_dir must be non-empty".into()));
        }
        let unsafe_name = layout
            .os_dirs
            .iter()
            .chain([&layout.kernel_file, &layout.skills_dir])
            .find(|name| !is_frame_safe(name));
        if let Some(name) = unsafe_name {
            return Err(CosError::Config(format!("{name:?} contains one of ']', ',' or a line break")));
        }
        Ok(())
    }
}
