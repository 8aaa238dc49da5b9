//! Orbit Kernel - ellipse geometry and Kepler-style orbit advancement
//!
//! Core modules:
//! - `geom`: Immutable ellipse values and boundary/arc queries
//! - `orbit`: Per-tick advancement of a body along an ellipse
//! - `error`: The kernel's two failure kinds
//!
//! The kernel is pure math: no rendering, no I/O, no platform
//! dependencies. A driving loop (an animation engine, or the bundled
//! `orbit-demo` binary) calls `OrbitState::advance` once per tick and
//! maps the returned point onto whatever it draws.

pub mod error;
pub mod geom;
pub mod orbit;

pub use error::{KernelError, KernelResult};
pub use geom::{Ellipse, PartialArc};
pub use orbit::OrbitState;

use glam::DVec2;

/// Kernel configuration constants
pub mod consts {
    /// Fixed demo timestep (120 Hz, matching a smooth animation tick)
    pub const SIM_DT: f64 = 1.0 / 120.0;

    /// Boundary samples per full parameter turn for arc iteration
    pub const ARC_SAMPLES_PER_TURN: usize = 256;

    /// Base parameter rate used when the caller has no opinion
    /// (the rate the source animation runs its planets at)
    pub const DEFAULT_BASE_RATE: f64 = 0.3;
}

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f64) -> f64 {
    use std::f64::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Wrap an ellipse parameter into [0, 1)
#[inline]
pub fn wrap_proportion(t: f64) -> f64 {
    t.rem_euclid(1.0)
}
