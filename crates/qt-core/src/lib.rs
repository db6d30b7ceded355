//! # qt-core
//!
//! Core types, settings, and error definitions for quadtrace.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace: the primitive type aliases, the error taxonomy with its
//! `ensure!` / `fail!` macros, per-request settings, and the number
//! formatting used by derivation traces.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Per-request engine settings.
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::IntegrationSettings;
