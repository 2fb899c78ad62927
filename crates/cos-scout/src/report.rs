//! Plain-text scout report.

use cos_core::{EnvStatus, StatusRecord};
use std::fmt;

const LABEL_WIDTH: usize = 12;

/// Displays a status record as the sectioned scout report.
pub struct Report<'a>(pub &'a StatusRecord);

pub fn render_report(record: &StatusRecord) -> String {
    Report(record).to_string()
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let env = &record.environment;
        writeln!(out, "[ENVIRONMENT]")?;
        if let Some(root) = &env.os_root {
            writeln!(out, "  OS Root  : ./{root}/")?;
        } else if env.is_dogfooding {
            writeln!(out, "  Mode     : SOURCE REPO (Dogfooding)")?;
        }
        match env.status {
            EnvStatus::Active => writeln!(out, "  Status   : ACTIVE")?,
            EnvStatus::NotInstalled => writeln!(out, "  Status   : NOT INSTALLED (Root context missing)")?,
        }
        writeln!(out)?;

        writeln!(out, "[L0: KERNEL]")?;
        match (&record.kernel.path, record.kernel.found) {
            (Some(path), true) => {
                writeln!(out, "  Path     : {path}")?;
                writeln!(out, "  Status   : FOUND")?;
            }
            _ => writeln!(out, "  Status   : MISSING")?,
        }
        writeln!(out)?;

        writeln!(out, "[L1: ADAPTERS]")?;
        for adapter in &record.adapters {
            let name = adapter.kind.file_name();
            match (&adapter.points_to, adapter.found) {
                (Some(target), true) => writeln!(out, "  + {name:<LABEL_WIDTH$} -> {target}")?,
                (None, true) => writeln!(out, "  + {name:<LABEL_WIDTH$}")?,
                (_, false) => writeln!(out, "  - {name:<LABEL_WIDTH$} NOT FOUND")?,
            }
        }
        if record.found_adapters().next().is_none() {
            writeln!(out, "  (No active adapters in current directory)")?;
        }
        writeln!(out)?;

        writeln!(out, "[L2: SKILLS]")?;
        if record.skills.is_empty() {
            writeln!(out, "  (No modular skills found)")?;
        }
        for skill in &record.skills {
            writeln!(out, "  * {skill}")?;
        }
        writeln!(out)?;

        writeln!(out, "[MEMORY]")?;
        let memory = if record.memory_found() { "FOUND" } else { "NONE" };
        writeln!(out, "  Status   : {memory}")?;
        Ok(())
    }
}
