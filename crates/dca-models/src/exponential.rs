//! Exponential decline.

use crate::model::DeclineModel;
use dca_core::{ensure, errors::Result, Flow, Rate, TimeGrid, Volume};

/// Exponential (constant-rate) decline: `q(t) = qi·e^(−di·t)`.
///
/// Cumulative production follows the closed form
/// `Q(t) = (qi − qi·e^(−di·t)) / di`.  Exponential decline is already its
/// own terminal form, so there is no switch state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialDecline {
    qi: Flow,
    di: Rate,
}

impl ExponentialDecline {
    /// Create an exponential decline model.
    ///
    /// `qi` and `di` must both be finite and strictly positive (`di > 0`
    /// also covers the closed form's division precondition `di != 0`).
    pub fn new(qi: Flow, di: Rate) -> Result<Self> {
        ensure!(qi.is_finite() && qi > 0.0, "qi must be positive, got {qi}");
        ensure!(di.is_finite() && di > 0.0, "di must be positive, got {di}");
        Ok(Self { qi, di })
    }

    /// The nominal decline rate `di`.
    pub fn nominal_decline(&self) -> Rate {
        self.di
    }
}

impl DeclineModel for ExponentialDecline {
    fn initial_rate(&self) -> Flow {
        self.qi
    }

    fn cumulative(&self, grid: &TimeGrid) -> Result<Vec<Volume>> {
        ensure!(
            !grid.is_empty(),
            "time grid must contain at least one sample"
        );
        Ok(grid
            .iter()
            .map(|&t| {
                let q = self.qi * (-self.di * t).exp();
                (self.qi - q) / self.di
            })
            .collect())
    }
}

/// Cumulative exponential-decline curve over `grid` for `(qi, di)`.
pub fn exponential_cumulative(grid: &TimeGrid, qi: Flow, di: Rate) -> Result<Vec<Volume>> {
    ExponentialDecline::new(qi, di)?.cumulative(grid)
}
