//! Harmonic decline with terminal-exponential switch.

use crate::model::DeclineModel;
use crate::switch::scan_with_terminal_tail;
use dca_core::{ensure, errors::Result, Flow, Rate, TimeGrid, Volume};

/// Harmonic decline — the `b = 1` special case of the Arps family:
/// `q(t) = qi / (1 + di·t)`, `Q(t) = (qi/di)·ln(qi/q(t))`.
///
/// Uses the same one-way terminal-exponential switch as the hyperbolic
/// model, with the decline-rate test evaluated at `b = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarmonicDecline {
    qi: Flow,
    di: Rate,
    dmin: Rate,
}

impl HarmonicDecline {
    /// Create a harmonic decline model.
    ///
    /// Fail-fast validation mirrors the hyperbolic model: `qi > 0`,
    /// `di > 0`, `dmin >= 0`.
    pub fn new(qi: Flow, di: Rate, dmin: Rate) -> Result<Self> {
        ensure!(qi.is_finite() && qi > 0.0, "qi must be positive, got {qi}");
        ensure!(di.is_finite() && di > 0.0, "di must be positive, got {di}");
        ensure!(
            dmin.is_finite() && dmin >= 0.0,
            "dmin must be non-negative, got {dmin}"
        );
        Ok(Self { qi, di, dmin })
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

impl DeclineModel for HarmonicDecline {
    fn initial_rate(&self) -> Flow {
        self.qi
    }

    fn cumulative(&self, grid: &TimeGrid) -> Result<Vec<Volume>> {
        ensure!(
            !grid.is_empty(),
            "time grid must contain at least one sample"
        );
        let Self { qi, di, dmin } = *self;
        Ok(scan_with_terminal_tail(grid, qi, di, 1.0, dmin, |t| {
            let q = qi / (1.0 + di * t);
            let cumulative = (qi / di) * (qi / q).ln();
            (q, cumulative)
        }))
    }
}

/// Cumulative harmonic-decline curve over `grid` for `(qi, di, dmin)`.
pub fn harmonic_cumulative(grid: &TimeGrid, qi: Flow, di: Rate, dmin: Rate) -> Result<Vec<Volume>> {
    HarmonicDecline::new(qi, di, dmin)?.cumulative(grid)
}
