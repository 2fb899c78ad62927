//! ULTP (Ultra-Low Token Protocol) — dense single-line encoding of a
//! project's context OS status.
//!
//! Wire format, five segments in fixed order:
//!
//! ```text
//! [OS:{A|N|D}][L0:{V|X};P:{path}][L1:{codes}][L2:{skills}][M:{V|X}]
//! ```
//!
//! Encoding is a lossy projection of [`cos_core::StatusRecord`]: adapter
//! targets are dropped and adapters survive only as their one-letter codes.

pub mod codec;
pub mod segment;

pub use codec::{decode, encode, validate, DecodedKernel, DecodedMemory, DecodedState};
pub use segment::EnvCode;
