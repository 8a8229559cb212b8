//! # hol-core
//!
//! Core types shared across the holidays-rs workspace: the error enum with
//! its `ensure!` / `fail!` macros, and the per-jurisdiction configuration
//! consumed by every rule set.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Jurisdiction configuration (`observed`, eager years, expansion).
pub mod config;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Gregorian calendar year.
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::JurisdictionConfig;
pub use errors::{Error, Result};
