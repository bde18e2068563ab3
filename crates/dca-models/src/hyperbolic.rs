//! Hyperbolic decline with terminal-exponential switch.

use crate::model::DeclineModel;
use crate::switch::scan_with_terminal_tail;
use dca_core::{ensure, errors::Result, Flow, Rate, Real, TimeGrid, Volume};

/// Hyperbolic (Arps) decline: `q(t) = qi / (1 + b·di·t)^(1/b)`, with a
/// one-way switch to an exponential tail once the instantaneous decline
/// rate reaches `dmin`.
///
/// Pre-switch cumulative production follows the closed form
///
/// `Q(t) = (qi^b / (di·(1−b))) · (qi^(1−b) − q(t)^(1−b))`
///
/// which divides by `(1−b)` and is therefore undefined at `b = 1`; the
/// harmonic model covers that case.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HyperbolicDecline {
    qi: Flow,
    b: Real,
    di: Rate,
    dmin: Rate,
}

impl HyperbolicDecline {
    /// Create a hyperbolic decline model.
    ///
    /// Fail-fast validation: `qi > 0`, `di > 0`, `dmin >= 0`, `b > 0`, and
    /// `b != 1` (use [`HarmonicDecline`](crate::HarmonicDecline) for the
    /// `b = 1` special case).  `dmin >= di` is accepted — it forces an
    /// immediate switch at the first grid step, producing an
    /// exponential-only curve at rate `dmin`.
    pub fn new(qi: Flow, b: Real, di: Rate, dmin: Rate) -> Result<Self> {
        ensure!(qi.is_finite() && qi > 0.0, "qi must be positive, got {qi}");
        ensure!(di.is_finite() && di > 0.0, "di must be positive, got {di}");
        ensure!(
            dmin.is_finite() && dmin >= 0.0,
            "dmin must be non-negative, got {dmin}"
        );
        ensure!(b.is_finite() && b > 0.0, "b must be positive, got {b}");
        ensure!(
            b != 1.0,
            "b = 1 makes the hyperbolic closed form undefined; use the harmonic model"
        );
        Ok(Self { qi, b, di, dmin })
    }

    /// The hyperbolic exponent `b`.
    pub fn exponent(&self) -> Real {
        self.b
    }

    /// The nominal initial decline rate `di`.
    pub fn nominal_decline(&self) -> Rate {
        self.di
    }

    /// The minimum terminal decline rate `dmin`.
    pub fn terminal_decline(&self) -> Rate {
        self.dmin
    }
}

impl DeclineModel for HyperbolicDecline {
    fn initial_rate(&self) -> Flow {
        self.qi
    }

    fn cumulative(&self, grid: &TimeGrid) -> Result<Vec<Volume>> {
        ensure!(
            !grid.is_empty(),
            "time grid must contain at least one sample"
        );
        let Self { qi, b, di, dmin } = *self;
        Ok(scan_with_terminal_tail(grid, qi, di, b, dmin, |t| {
            let q = qi / (1.0 + b * di * t).powf(1.0 / b);
            let cumulative = (qi.powf(b) / (di * (1.0 - b)))
                * (qi.powf(1.0 - b) - q.powf(1.0 - b));
            (q, cumulative)
        }))
    }
}

/// Cumulative hyperbolic-decline curve over `grid` for `(qi, b, di, dmin)`.
pub fn hyperbolic_cumulative(
    grid: &TimeGrid,
    qi: Flow,
    b: Real,
    di: Rate,
    dmin: Rate,
) -> Result<Vec<Volume>> {
    HyperbolicDecline::new(qi, b, di, dmin)?.cumulative(grid)
}
