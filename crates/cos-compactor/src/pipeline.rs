//! Compression pipeline — classification, join, then shrinking passes.

use crate::classify::classify_line;
use crate::shrink;

/// Compression result with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult {
    pub output: String,
    pub original_len: usize,
    pub compressed_len: usize,
    pub reduction_pct: f64,
    pub lines_kept: usize,
    pub lines_dropped: usize,
}

impl CompressionResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.compressed_len as f64 / self.original_len as f64
    }
}

/// Compress markdown into a single directive line.
pub fn compress(content: &str) -> String {
    compress_with_stats(content).output
}

/// Compress and report what happened.
pub fn compress_with_stats(content: &str) -> CompressionResult {
    let original_len = content.len();
    let mut density: Vec<String> = Vec::new();
    let mut lines_dropped = 0;

    for line in content.lines() {
        match classify_line(line).render() {
            Some(compact) => density.push(compact),
            None => lines_dropped += 1,
        }
    }

    let output = shrink::shrink(&density.join(" "));
    let compressed_len = output.len();
    let reduction_pct = if original_len > 0 {
        (original_len.saturating_sub(compressed_len) as f64 / original_len as f64) * 100.0
    } else {
        0.0
    };
    tracing::debug!(
        kept = density.len(),
        dropped = lines_dropped,
        original_len,
        compressed_len,
        "compressed document"
    );

    CompressionResult {
        output,
        original_len,
        compressed_len,
        reduction_pct,
        lines_kept: density.len(),
        lines_dropped,
    }
}
