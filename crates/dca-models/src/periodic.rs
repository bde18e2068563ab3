//! Periodic-volume transform.

use dca_core::Volume;

/// First-difference a cumulative-production curve into per-period volumes
/// (the conventional reporting unit, e.g. monthly volume).
///
/// Element `i` is `cumulative[i+1] - cumulative[i]`; the result is one
/// element shorter than the input.  A curve with fewer than two samples has
/// no defined period, so the result is empty — not an error.
///
/// At long forecast horizons the differences approach the limits of
/// floating-point precision and degrade into rounding noise; callers needing
/// clean long-horizon output apply their own floor.
pub fn periodic_volumes(cumulative: &[Volume]) -> Vec<Volume> {
    if cumulative.len() < 2 {
        return Vec::new();
    }
    cumulative.windows(2).map(|w| w[1] - w[0]).collect()
}
