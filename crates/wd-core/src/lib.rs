//! # wd-core
//!
//! Core error definitions and settings for workdays-rs.
//!
//! This crate provides the foundational pieces shared by the other crates in
//! the workspace: the error hierarchy and the process-wide [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// Global library settings (reference year).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Integer type used for calendar years.
pub type Year = i32;

/// Signed count of days (date offsets, leave lengths).
pub type Integer = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedReferenceYear, Settings};
