//! # declinecurve
//!
//! Forward production forecasting for depleting wells via standard
//! decline-curve-analysis (DCA) models: exponential, hyperbolic, and
//! harmonic declines, with a one-way switch to a terminal exponential tail
//! once the instantaneous decline rate reaches a configured minimum.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code (forecast drivers, unit
//! conversion, plotting, export) should depend on this crate rather than the
//! individual `dca-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! declinecurve = "0.1"
//! ```
//!
//! ```rust
//! use declinecurve::core::TimeGrid;
//! use declinecurve::models::{hyperbolic_cumulative, periodic_volumes};
//!
//! // 40 years of monthly offsets; rates already converted to per-month.
//! let grid = TimeGrid::monthly(480);
//! let curve = hyperbolic_cumulative(&grid, 456_250.0, 1.5, 1.4 / 12.0, 0.005).unwrap();
//! let monthly = periodic_volumes(&curve);
//! assert_eq!(monthly.len(), 480);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, the time grid, and error definitions.
pub use dca_core as core;

/// Decline models and the periodic-volume transform.
pub use dca_models as models;
