//! The fixed actuator setpoint grid and its hysteresis walk.
//!
//! The thermal actuator accepts a continuous command, but the centering loop
//! only ever writes values from a fixed ascending grid. The grid is
//! square-root spaced over [0, 100]: the heater's effect on drift is roughly
//! quadratic in the command, so sqrt spacing gives approximately uniform
//! drift steps per grid step.
//!
//! Stepping applies directional hysteresis: an Increase lands on the
//! smallest grid value strictly above the current command, a Decrease on the
//! largest strictly below, each clamped at the grid's end. Snapping to the
//! nearest point instead would let the command bounce between two neighbors
//! whenever the measurement hovers near a threshold; with the strict walk, a
//! full traversal takes one threshold event per grid point.

use crate::direction::Direction;
use crate::error::{ControlError, ControlResult};
use brs_core::numeric::round_channel;
use serde::{Deserialize, Serialize};

/// Normalized command range spanned by the grid.
pub const GRID_SPAN: (f64, f64) = (0.0, 100.0);

/// Ascending sequence of admissible actuator setpoints.
///
/// Built once per run and immutable afterwards. Values are rounded to the
/// channel precision so that grid membership is decidable against rounded
/// channel reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlGrid {
    points: Vec<f64>,
}

impl ControlGrid {
    /// Build the sqrt-spaced grid with `n` points over [0, 100].
    ///
    /// # Errors
    ///
    /// Returns an error if `n < 2`, or if rounding to channel precision
    /// collapses two neighboring points (the grid must stay strictly
    /// increasing, which bounds `n` at a few hundred points).
    pub fn sqrt_spaced(n: usize) -> ControlResult<Self> {
        if n < 2 {
            return Err(ControlError::InvalidArg {
                what: "grid needs at least 2 points",
            });
        }
        let (lo, hi) = GRID_SPAN;
        let step = (hi - lo) / (n - 1) as f64;
        let points: Vec<f64> = (0..n)
            .map(|i| round_channel((lo + step * i as f64).sqrt()))
            .collect();
        Self::from_points(points)
    }

    /// Wrap an explicit point sequence, checking strict ascent.
    pub fn from_points(points: Vec<f64>) -> ControlResult<Self> {
        if points.len() < 2 {
            return Err(ControlError::InvalidArg {
                what: "grid needs at least 2 points",
            });
        }
        for (i, pair) in points.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(ControlError::GridNotAscending {
                    index: i,
                    left: pair[0],
                    right: pair[1],
                });
            }
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn min(&self) -> f64 {
        self.points[0]
    }

    pub fn max(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Index of the grid point closest to `value`.
    ///
    /// Ties take the lowest index, which matters downstream: the hysteresis
    /// walk starts from this index, so the tie-break decides which neighbor
    /// the walk leaves from. Preserved as-is; do not "fix" to round-half-up.
    pub fn closest_index(&self, value: f64) -> usize {
        let mut best = 0;
        let mut best_dist = (self.points[0] - value).abs();
        for (i, p) in self.points.iter().enumerate().skip(1) {
            let dist = (p - value).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }

    /// Next setpoint for `current` in the commanded `direction`.
    ///
    /// - `Hold` returns `current` unchanged, even when it lies off-grid.
    /// - `Increase` returns the smallest grid value strictly greater than
    ///   `current`, clamped to the top point (no wraparound).
    /// - `Decrease` returns the largest grid value strictly less than
    ///   `current`, clamped to the bottom point.
    pub fn step(&self, current: f64, direction: Direction) -> f64 {
        let mut i = self.closest_index(current);
        match direction {
            Direction::Hold => current,
            Direction::Increase => {
                while i < self.points.len() - 1 && self.points[i] <= current {
                    i += 1;
                }
                self.points[i]
            }
            Direction::Decrease => {
                while i > 0 && self.points[i] >= current {
                    i -= 1;
                }
                self.points[i]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_point_sqrt_grid() {
        let grid = ControlGrid::sqrt_spaced(4).unwrap();
        assert_eq!(grid.points(), &[0.0, 5.77, 8.16, 10.0]);
    }

    #[test]
    fn default_sized_grid_is_strictly_increasing() {
        let grid = ControlGrid::sqrt_spaced(64).unwrap();
        assert_eq!(grid.len(), 64);
        assert_eq!(grid.min(), 0.0);
        assert_eq!(grid.max(), 10.0);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(ControlGrid::sqrt_spaced(0).is_err());
        assert!(ControlGrid::sqrt_spaced(1).is_err());
        // Far beyond the point where 2-decimal rounding collapses neighbors.
        assert!(ControlGrid::sqrt_spaced(2000).is_err());
    }

    #[test]
    fn rejects_non_ascending_points() {
        let err = ControlGrid::from_points(vec![0.0, 2.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, ControlError::GridNotAscending { index: 1, .. }));
    }

    #[test]
    fn closest_index_takes_lowest_on_tie() {
        let grid = ControlGrid::from_points(vec![0.0, 2.0, 4.0]).unwrap();
        // 1.0 is equidistant from 0.0 and 2.0.
        assert_eq!(grid.closest_index(1.0), 0);
        assert_eq!(grid.closest_index(3.0), 1);
    }

    #[test]
    fn step_scenarios_from_four_point_grid() {
        let grid = ControlGrid::sqrt_spaced(4).unwrap();
        assert_eq!(grid.step(6.0, Direction::Increase), 8.16);
        assert_eq!(grid.step(6.0, Direction::Decrease), 5.77);
    }

    #[test]
    fn hold_preserves_off_grid_values() {
        let grid = ControlGrid::sqrt_spaced(4).unwrap();
        assert_eq!(grid.step(6.0, Direction::Hold), 6.0);
        assert_eq!(grid.step(-3.5, Direction::Hold), -3.5);
    }

    #[test]
    fn increase_from_grid_point_moves_up() {
        let grid = ControlGrid::sqrt_spaced(4).unwrap();
        assert_eq!(grid.step(5.77, Direction::Increase), 8.16);
        assert_eq!(grid.step(8.16, Direction::Decrease), 5.77);
    }

    #[test]
    fn clamps_at_grid_ends() {
        let grid = ControlGrid::sqrt_spaced(4).unwrap();
        assert_eq!(grid.step(10.0, Direction::Increase), 10.0);
        assert_eq!(grid.step(12.0, Direction::Increase), 10.0);
        assert_eq!(grid.step(0.0, Direction::Decrease), 0.0);
        assert_eq!(grid.step(-1.0, Direction::Decrease), 0.0);
    }

    #[test]
    fn increase_then_decrease_does_not_oscillate() {
        let grid = ControlGrid::sqrt_spaced(4).unwrap();
        // Off-grid start: the round trip lands on the grid point below the
        // Increase result, not back on the original value.
        let up = grid.step(6.0, Direction::Increase);
        assert_eq!(grid.step(up, Direction::Decrease), 5.77);
        // On-grid start is the documented boundary case: the round trip does
        // return to the original value, because the original value is itself
        // the largest grid point below the Increase result.
        let up = grid.step(5.77, Direction::Increase);
        assert_eq!(grid.step(up, Direction::Decrease), 5.77);
    }
}
