//! # dca-models
//!
//! Arps decline-curve models for forward production forecasting:
//! exponential, hyperbolic, and harmonic cumulative-production evaluators,
//! the terminal-exponential switch shared by the latter two, and the
//! periodic-volume transform that turns a cumulative curve into per-period
//! reporting volumes.
//!
//! All evaluation is pure and synchronous; each call owns its switch state
//! locally, so independent forecasts may run concurrently with no
//! coordination.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Instantaneous nominal decline rate for the Arps family.
pub mod decline_rate;

/// Exponential decline.
pub mod exponential;

/// Harmonic decline (`b = 1`) with terminal-exponential switch.
pub mod harmonic;

/// Hyperbolic decline with terminal-exponential switch.
pub mod hyperbolic;

/// The `DeclineModel` trait.
pub mod model;

/// Periodic-volume transform.
pub mod periodic;

mod switch;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use decline_rate::nominal_decline_rate;
pub use exponential::{exponential_cumulative, ExponentialDecline};
pub use harmonic::{harmonic_cumulative, HarmonicDecline};
pub use hyperbolic::{hyperbolic_cumulative, HyperbolicDecline};
pub use model::DeclineModel;
pub use periodic::periodic_volumes;
