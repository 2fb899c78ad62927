//! Directive compactor — turns human-oriented markdown into a dense,
//! single-line instruction string.
//!
//! Stages:
//! 1. Line classification (drop comments/fluff, compact headings and bullets)
//! 2. Stopword stripping
//! 3. Whitespace and sentence-break collapse
//! 4. Directive keyword mapping (`must` → `!`, `violation` → `ERR`, ...)
//!
//! Compression is lossy and one-way; there is no decompressor.

pub mod classify;
pub mod pipeline;
pub mod rules;
pub mod shrink;

pub use classify::{classify_line, LineKind};
pub use pipeline::{compress, compress_with_stats, CompressionResult};
