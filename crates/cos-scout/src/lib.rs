//! Scout — inspects a project directory and reports the state of its
//! context OS as a [`cos_core::StatusRecord`].

pub mod engine;
pub mod report;

pub use engine::ScoutEngine;
pub use report::{render_report, Report};
