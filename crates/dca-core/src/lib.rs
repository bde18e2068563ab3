//! # dca-core
//!
//! Core types, the validated time grid, and error definitions for
//! declinecurve.
//!
//! This crate provides the foundational building blocks shared across the
//! workspace — primitive type aliases, the error enum with its `ensure!` /
//! `ensure_grid!` macros, and the `TimeGrid` container consumed by every
//! curve evaluator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_grid!` macros.
pub mod errors;

/// Validated forecast time grid.
pub mod time_grid;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library (double precision).
pub type Real = f64;

/// Time offset since the forecast start, in grid periods (months in the
/// reference use case — the core assumes no particular calendar unit).
pub type Time = Real;

/// A nominal decline rate, as a fraction per period (e.g. 0.05 = 5 %/period).
pub type Rate = Real;

/// An instantaneous production rate, in volume units per period.
pub type Flow = Real;

/// A produced volume (cumulative or per-period).
pub type Volume = Real;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use time_grid::TimeGrid;
