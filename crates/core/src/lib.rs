//! bintoheader-core
//!
//! Core library for embedding binary assets (fonts, images, blobs) into C/C++
//! sources as a preprocessor string literal plus a size macro.
//!
//! This crate defines the byte escaping, include-guard derivation, header
//! rendering, and the single file-writing entry point. The pure pieces
//! (`escape`, `guard`, `header`) never touch the filesystem; only `emit` does.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends.

pub mod config;
pub mod emit;
pub mod error;
pub mod escape;
pub mod guard;
pub mod header;

pub use config::HeaderConfig;
pub use emit::{emit_header, EmitReport};
pub use error::{EmitError, EmitResult};
