//! # tender-core
//!
//! Core types and error definitions for tender.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the error hierarchy with its `ensure!`
//! family of macros, the [`RoundingMode`] convention enum, and the
//! process-wide [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_state!` / `overflow!` macros.
pub mod errors;

/// Rounding conventions.
pub mod rounding_mode;

/// Global library settings (default rounding mode).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use rounding_mode::RoundingMode;
pub use settings::{ScopedDefaultRounding, Settings};
