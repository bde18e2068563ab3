//! Terminal-exponential switch state machine.
//!
//! Hyperbolic and harmonic declines predict unphysically slow decline at
//! late time, so once the instantaneous nominal decline rate falls to/below
//! a configured minimum `dmin` the curve switches to a simple exponential
//! tail.  The switch is a one-way transition: the machine starts in the
//! primary (hyperbolic/harmonic) state, records a provisional anchor on
//! every primary step, and freezes that anchor the first time the switch
//! condition holds.  Anchoring the tail at the last primary evaluation keeps
//! the curve continuous in both value and slope at the switch point.

use crate::decline_rate::nominal_decline_rate;
use dca_core::{Flow, Rate, Real, Time, TimeGrid, Volume};

/// The frozen (or provisional) pre-switch anchor: the production rate,
/// time offset, and cumulative volume of the last primary-branch step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SwitchAnchor {
    pub rate: Flow,
    pub time: Time,
    pub cumulative: Volume,
}

/// Machine state threaded through the sequential scan.  One-way: once
/// `Tail` is entered the primary branch is never re-evaluated, even if a
/// later step would mathematically satisfy the primary condition again.
#[derive(Debug, Clone, Copy)]
enum SwitchState {
    /// Primary (hyperbolic/harmonic) branch active.  Holds the provisional
    /// anchor from the last primary step, if any step has run yet.
    Primary(Option<SwitchAnchor>),
    /// Terminal exponential tail, anchored at the frozen switch point.
    Tail(SwitchAnchor),
}

/// Cumulative volume on the exponential tail at offset `t`.
///
/// `q(t) = rate·e^(−dmin·(t − time))`, `Q(t) = cumulative + (rate − q)/dmin`.
/// The tail's input decline rate is frozen at `dmin`; it is never recomputed
/// from the primary formula.
#[inline]
fn tail_cumulative(anchor: &SwitchAnchor, dmin: Rate, t: Time) -> Volume {
    let q = anchor.rate * (-dmin * (t - anchor.time)).exp();
    anchor.cumulative + (anchor.rate - q) / dmin
}

/// Sequential scan over the grid, applying `primary` (which yields the
/// production rate and cumulative volume of the hyperbolic or harmonic
/// closed form at `t`) until the switch condition `d(t) <= dmin` first
/// holds, then the exponential tail for every remaining step.
///
/// If the very first step already satisfies the condition (`dmin >= d(0)`,
/// e.g. `dmin >= di`), the tail is anchored at `(qi, 0, 0)` and the primary
/// branch is never taken.
///
/// Callers validate parameters and grid non-emptiness before calling; the
/// scan itself is total.  Note `dmin = 0` can never trigger the switch
/// (`d(t) > 0` for every finite `t`), so the division by `dmin` inside the
/// tail is only reached with `dmin > 0`.
pub(crate) fn scan_with_terminal_tail<F>(
    grid: &TimeGrid,
    qi: Flow,
    di: Rate,
    b: Real,
    dmin: Rate,
    primary: F,
) -> Vec<Volume>
where
    F: Fn(Time) -> (Flow, Volume),
{
    let mut state = SwitchState::Primary(None);
    let mut curve = Vec::with_capacity(grid.len());

    for &t in grid {
        let value = match state {
            SwitchState::Primary(provisional) => {
                if nominal_decline_rate(t, di, b) <= dmin {
                    // First step at/below dmin: freeze the anchor from the
                    // immediately preceding primary step, or fall back to
                    // the initial conditions when no primary step ran.
                    let anchor = provisional.unwrap_or(SwitchAnchor {
                        rate: qi,
                        time: 0.0,
                        cumulative: 0.0,
                    });
                    state = SwitchState::Tail(anchor);
                    tail_cumulative(&anchor, dmin, t)
                } else {
                    let (q, cumulative) = primary(t);
                    state = SwitchState::Primary(Some(SwitchAnchor {
                        rate: q,
                        time: t,
                        cumulative,
                    }));
                    cumulative
                }
            }
            SwitchState::Tail(anchor) => tail_cumulative(&anchor, dmin, t),
        };
        curve.push(value);
    }

    curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // A fake primary branch with a linear cumulative, so the switch
    // bookkeeping can be checked independently of any closed form.
    fn linear_primary(qi: Flow) -> impl Fn(Time) -> (Flow, Volume) {
        move |t| (qi, qi * t)
    }

    #[test]
    fn never_switches_when_dmin_zero() {
        let grid = TimeGrid::monthly(100);
        let qi = 1000.0;
        let curve = scan_with_terminal_tail(&grid, qi, 0.1, 1.0, 0.0, linear_primary(qi));
        // Every step stays on the primary branch.
        for (i, &t) in grid.iter().enumerate() {
            assert_abs_diff_eq!(curve[i], qi * t, epsilon = 1e-9);
        }
    }

    #[test]
    fn immediate_switch_anchors_at_initial_conditions() {
        let grid = TimeGrid::monthly(10);
        let qi = 1000.0;
        let dmin = 0.08;
        // dmin >= di, so d(0) = di <= dmin and the primary branch never runs.
        let curve = scan_with_terminal_tail(&grid, qi, 0.05, 1.0, dmin, |_| {
            panic!("primary branch must not be evaluated")
        });
        for (i, &t) in grid.iter().enumerate() {
            let q = qi * (-dmin * t).exp();
            assert_abs_diff_eq!(curve[i], (qi - q) / dmin, epsilon = 1e-9);
        }
    }

    #[test]
    fn anchor_frozen_from_last_primary_step() {
        // di = 0.1, b = 1, dmin = 0.02: d(t) <= dmin from t = 40 onwards.
        let grid = TimeGrid::monthly(60);
        let qi = 500.0;
        let dmin = 0.02;
        let curve = scan_with_terminal_tail(&grid, qi, 0.1, 1.0, dmin, linear_primary(qi));

        // Last primary step is t = 39; anchor = (qi, 39, qi·39).
        assert_abs_diff_eq!(curve[39], qi * 39.0, epsilon = 1e-9);
        for t in 40..=60 {
            let q = qi * (-dmin * (t as f64 - 39.0)).exp();
            let expected = qi * 39.0 + (qi - q) / dmin;
            assert_abs_diff_eq!(curve[t], expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn transition_is_one_way() {
        // An adversarial primary that would "un-satisfy" the condition is
        // irrelevant: the condition is only tested in the Primary state.
        let grid = TimeGrid::monthly(50);
        let qi = 100.0;
        let curve = scan_with_terminal_tail(&grid, qi, 0.1, 1.0, 0.02, linear_primary(qi));
        // Tail cumulative is strictly below the linear primary would-be
        // values for all post-switch steps, and strictly increasing.
        for t in 41..=50 {
            assert!(curve[t] > curve[t - 1]);
            assert!(curve[t] < qi * t as f64);
        }
    }
}
