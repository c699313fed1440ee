//! # hh-core
//!
//! Core types and error definitions for hedgehog.
//!
//! This crate provides the building blocks shared across the workspace —
//! the primitive type aliases, the error enum, and the `ensure!` / `fail!`
//! convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_post!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A point in the independent time variable of an ODE.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
