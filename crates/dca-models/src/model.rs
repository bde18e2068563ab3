//! The `DeclineModel` trait.

use crate::periodic::periodic_volumes;
use dca_core::{errors::Result, Flow, TimeGrid, Volume};

/// Common seam over the Arps decline models.
///
/// A model owns its validated parameters; evaluation over a grid is pure and
/// shares no state between calls, so independent forecasts for different
/// wells may run concurrently without coordination.
pub trait DeclineModel {
    /// Production rate at the forecast start (`qi`).
    fn initial_rate(&self) -> Flow;

    /// Cumulative production at each grid offset.
    ///
    /// The returned curve is aligned 1:1 with the grid and monotonically
    /// non-decreasing.  Fails with a Domain error on an empty grid.
    fn cumulative(&self, grid: &TimeGrid) -> Result<Vec<Volume>>;

    /// Per-period volumes, one element shorter than the grid: the first
    /// difference of the cumulative curve.
    fn periodic_volumes(&self, grid: &TimeGrid) -> Result<Vec<Volume>> {
        Ok(periodic_volumes(&self.cumulative(grid)?))
    }
}
