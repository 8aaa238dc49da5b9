//! Per-tick orbit advancement
//!
//! An `OrbitState` carries one body's phase along an ellipse and moves
//! it faster when the body is near its attracting focus, slower when
//! far — a cheap visual stand-in for equal-areas-in-equal-times. The
//! rate law is deliberately `base_rate / distance` (1/r, not the 1/r²
//! a real inverse-square force would give); that approximation is the
//! contract, not a bug to fix.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::geom::Ellipse;
use crate::wrap_proportion;

/// Mutable per-body orbit state
///
/// One per orbiting body, mutated once per tick for the life of the
/// animation. The ellipse is not stored here: `advance` borrows it
/// read-only, so many bodies can share one immutable [`Ellipse`]
/// (even orbiting different foci of the same ellipse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitState {
    /// The attracting focus, by position (a bare ellipse does not know
    /// which of its two foci is "the sun")
    focus: DVec2,
    /// Fraction of the way around the boundary, always in [0, 1)
    proportion: f64,
    /// Configured parameter rate before the 1/distance scaling
    base_rate: f64,
}

impl OrbitState {
    /// New state at proportion 0
    ///
    /// `base_rate` must be positive and finite.
    pub fn new(focus: DVec2, base_rate: f64) -> KernelResult<Self> {
        if !(base_rate.is_finite() && base_rate > 0.0) {
            return Err(KernelError::InvalidParameter(format!(
                "base rate must be positive and finite, got {base_rate}"
            )));
        }
        if !focus.is_finite() {
            return Err(KernelError::InvalidParameter(
                "focus must be finite".to_string(),
            ));
        }
        Ok(Self {
            focus,
            proportion: 0.0,
            base_rate,
        })
    }

    /// New state with the default rate the source animation uses
    pub fn with_default_rate(focus: DVec2) -> Self {
        Self {
            focus,
            proportion: 0.0,
            base_rate: crate::consts::DEFAULT_BASE_RATE,
        }
    }

    /// Set the starting phase (wrapped into [0, 1))
    pub fn with_proportion(mut self, t: f64) -> Self {
        self.proportion = wrap_proportion(t);
        self
    }

    /// Current phase in [0, 1)
    #[inline]
    pub fn proportion(&self) -> f64 {
        self.proportion
    }

    /// The attracting focus
    #[inline]
    pub fn focus(&self) -> DVec2 {
        self.focus
    }

    /// Configured base rate
    #[inline]
    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    /// Current position on the ellipse
    pub fn position(&self, ellipse: &Ellipse) -> DVec2 {
        ellipse.point_from_proportion(self.proportion)
    }

    /// Advance the body by one tick of `dt` and return its new position
    ///
    /// The parameter rate is `base_rate / distance`, with the distance
    /// measured from the current position to the focus before the
    /// step. `dt = 0` leaves the phase unchanged; `dt > 0` advances it
    /// monotonically (wrapping mod 1).
    ///
    /// If the body sits exactly on the focus the rate is undefined:
    /// this returns [`KernelError::DegenerateOrbit`] and skips the
    /// tick, leaving the state untouched. Callers may retry next tick
    /// or treat it as fatal; the kernel itself never terminates
    /// anything.
    pub fn advance(&mut self, ellipse: &Ellipse, dt: f64) -> KernelResult<DVec2> {
        let current = ellipse.point_from_proportion(self.proportion);
        let distance = (current - self.focus).length();
        if distance == 0.0 {
            return Err(KernelError::DegenerateOrbit {
                proportion: self.proportion,
            });
        }
        let effective_rate = self.base_rate / distance;
        self.proportion = wrap_proportion(self.proportion + effective_rate * dt);
        Ok(ellipse.point_from_proportion(self.proportion))
    }
}
