//! Instantaneous nominal decline rate.

use dca_core::{Rate, Real, Time};

/// Nominal decline rate `d(t) = di / (1 + b·di·t)` for the Arps family.
///
/// Shared by the hyperbolic and harmonic evaluators (harmonic callers pass
/// `b = 1`); this is the sole place the terminal-switch condition
/// `d(t) <= dmin` is evaluated against.  Total over `t >= 0`, `di > 0`,
/// `b >= 0`; at `b = 0` it degenerates to the constant exponential rate
/// `di`.
#[inline]
pub fn nominal_decline_rate(t: Time, di: Rate, b: Real) -> Rate {
    di / (1.0 + b * di * t)
}
