//! Ellipse value type and point/foci queries
//!
//! An ellipse is stored as center, semi-axes and major-axis rotation:
//! - semi_major (a), semi_minor (b): a >= b > 0 always
//! - rotation: angle of the major axis from +x (radians)
//! - linear eccentricity c = sqrt(a² - b²); foci at center ± c along
//!   the major axis

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::{KernelError, KernelResult};
use crate::{normalize_angle, wrap_proportion};

/// An ellipse in the plane, immutable once constructed
///
/// Fields are private so the `a >= b > 0` invariant cannot be broken
/// after a constructor has accepted the input. A circle (`a == b`) is
/// a valid limit case with both foci at the center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Center point
    center: DVec2,
    /// Semi-major axis length (a)
    semi_major: f64,
    /// Semi-minor axis length (b)
    semi_minor: f64,
    /// Major-axis angle from +x (radians, normalized to [-π, π))
    rotation: f64,
}

impl Ellipse {
    /// Build from semi-axes
    ///
    /// Rejects non-positive or non-finite axes and `a < b`. Axis
    /// ordering is never silently swapped.
    pub fn from_semi_axes(
        center: DVec2,
        semi_major: f64,
        semi_minor: f64,
        rotation: f64,
    ) -> KernelResult<Self> {
        if !semi_major.is_finite() || !semi_minor.is_finite() || !rotation.is_finite() {
            return Err(KernelError::InvalidParameter(
                "ellipse axes and rotation must be finite".to_string(),
            ));
        }
        if semi_minor <= 0.0 {
            return Err(KernelError::InvalidParameter(format!(
                "semi-minor axis must be positive, got {semi_minor}"
            )));
        }
        if semi_major < semi_minor {
            return Err(KernelError::InvalidParameter(format!(
                "semi-major axis ({semi_major}) must be >= semi-minor axis ({semi_minor})"
            )));
        }
        Ok(Self {
            center,
            semi_major,
            semi_minor,
            rotation: normalize_angle(rotation),
        })
    }

    /// Build from a circle and an eccentric point inside it
    ///
    /// The geometric derivation used when folding a circle's rim onto an
    /// off-center point: with `d = eccentric_point - circle_center`,
    /// the creases envelope an ellipse with `a = radius / 2`,
    /// `c = |d| / 2`, `b = sqrt(a² - c²)`, centered at the midpoint of
    /// the two points, major axis along `d`.
    ///
    /// Rejects a non-positive radius and an eccentric point on or
    /// outside the circle (`|d| >= radius`, where `b` turns imaginary).
    pub fn from_circle(
        circle_center: DVec2,
        radius: f64,
        eccentric_point: DVec2,
    ) -> KernelResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(KernelError::InvalidParameter(format!(
                "circle radius must be positive and finite, got {radius}"
            )));
        }
        let d = eccentric_point - circle_center;
        if !d.is_finite() {
            return Err(KernelError::InvalidParameter(
                "eccentric point must be finite".to_string(),
            ));
        }
        let dist = d.length();
        if dist >= radius {
            return Err(KernelError::InvalidParameter(format!(
                "eccentric point at distance {dist} is not strictly inside circle of radius {radius}"
            )));
        }

        let a = radius / 2.0;
        let c = dist / 2.0;
        // dist < radius guarantees c < a, so b is real and positive
        let b = (a * a - c * c).sqrt();
        // d = 0 degenerates to a circle; any rotation works, use 0
        let rotation = if dist > 0.0 { d.y.atan2(d.x) } else { 0.0 };

        log::debug!(
            "circle construction: a={a} b={b} c={c} rotation={rotation}"
        );

        Ok(Self {
            center: circle_center + d / 2.0,
            semi_major: a,
            semi_minor: b,
            rotation: normalize_angle(rotation),
        })
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Semi-major axis length (a)
    #[inline]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Semi-minor axis length (b)
    #[inline]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Major-axis angle from +x (radians)
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Linear eccentricity c = sqrt(a² - b²), 0 for a circle
    #[inline]
    pub fn linear_eccentricity(&self) -> f64 {
        (self.semi_major * self.semi_major - self.semi_minor * self.semi_minor).sqrt()
    }

    /// Unit vector along the major axis
    #[inline]
    fn major_axis_dir(&self) -> DVec2 {
        DVec2::from_angle(self.rotation)
    }

    /// Point on the boundary at parameter `t`
    ///
    /// Sweeps counter-clockwise: `θ = TAU · (t mod 1)`, local point
    /// `(a·cosθ, b·sinθ)` rotated and translated into place. Any real
    /// `t` is valid; it wraps via Euclidean modulo and is never
    /// clamped. Parameter-linear, NOT arc-length-linear: equal steps in
    /// `t` do not cover equal boundary distance unless the ellipse is a
    /// circle.
    pub fn point_from_proportion(&self, t: f64) -> DVec2 {
        let theta = TAU * wrap_proportion(t);
        let local = DVec2::new(
            self.semi_major * theta.cos(),
            self.semi_minor * theta.sin(),
        );
        self.center + self.major_axis_dir().rotate(local)
    }

    /// The two foci, `center ± c` along the major axis
    ///
    /// Order is unspecified but stable: the `+c` focus (toward
    /// `point_from_proportion(0)`) always comes first. Both coincide
    /// with the center for a circle.
    pub fn foci(&self) -> (DVec2, DVec2) {
        let offset = self.major_axis_dir() * self.linear_eccentricity();
        (self.center + offset, self.center - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn test_from_semi_axes_rejects_bad_axes() {
        let c = DVec2::ZERO;
        assert!(matches!(
            Ellipse::from_semi_axes(c, 3.0, 5.0, 0.0),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(matches!(
            Ellipse::from_semi_axes(c, 5.0, 0.0, 0.0),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(matches!(
            Ellipse::from_semi_axes(c, 5.0, -3.0, 0.0),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(matches!(
            Ellipse::from_semi_axes(c, f64::NAN, 3.0, 0.0),
            Err(KernelError::InvalidParameter(_))
        ));
        // circle is a valid limit case
        assert!(Ellipse::from_semi_axes(c, 4.0, 4.0, 0.0).is_ok());
    }

    #[test]
    fn test_periodicity() {
        let e = Ellipse::from_semi_axes(DVec2::new(1.0, -2.0), 5.0, 3.0, 0.7).unwrap();
        let p0 = e.point_from_proportion(0.0);
        let p1 = e.point_from_proportion(1.0);
        assert!((p0 - p1).length() < 1e-9);
    }

    #[test]
    fn test_known_points_axis_aligned() {
        let e = Ellipse::from_semi_axes(DVec2::ZERO, 5.0, 3.0, 0.0).unwrap();
        // t=0 is the +a vertex, t=0.25 the +b vertex, t=0.5 the -a vertex
        assert!((e.point_from_proportion(0.0) - DVec2::new(5.0, 0.0)).length() < 1e-9);
        assert!((e.point_from_proportion(0.25) - DVec2::new(0.0, 3.0)).length() < 1e-9);
        assert!((e.point_from_proportion(0.5) - DVec2::new(-5.0, 0.0)).length() < 1e-9);
        assert!((e.point_from_proportion(0.75) - DVec2::new(0.0, -3.0)).length() < 1e-9);
    }

    #[test]
    fn test_foci_a5_b3() {
        // c = sqrt(25 - 9) = 4
        let e = Ellipse::from_semi_axes(DVec2::ZERO, 5.0, 3.0, 0.0).unwrap();
        assert!((e.linear_eccentricity() - 4.0).abs() < 1e-12);
        let (f1, f2) = e.foci();
        assert!((f1 - DVec2::new(4.0, 0.0)).length() < 1e-12);
        assert!((f2 - DVec2::new(-4.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_circle_foci_and_radius() {
        let center = DVec2::new(2.0, 3.0);
        let e = Ellipse::from_semi_axes(center, 4.0, 4.0, 1.3).unwrap();
        let (f1, f2) = e.foci();
        assert!((f1 - center).length() < 1e-12);
        assert!((f2 - center).length() < 1e-12);
        for i in 0..16 {
            let p = e.point_from_proportion(i as f64 / 16.0);
            assert!(((p - center).length() - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_from_circle_construction() {
        // radius 4 circle at origin, eccentric point at (2, 0):
        // a = 2, c = 1, b = sqrt(3), center at (1, 0), major axis +x
        let e = Ellipse::from_circle(DVec2::ZERO, 4.0, DVec2::new(2.0, 0.0)).unwrap();
        assert!((e.semi_major() - 2.0).abs() < 1e-12);
        assert!((e.semi_minor() - 3.0f64.sqrt()).abs() < 1e-12);
        assert!((e.center() - DVec2::new(1.0, 0.0)).length() < 1e-12);
        assert!(e.rotation().abs() < 1e-12);
        assert!((e.linear_eccentricity() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_circle_major_axis_along_offset() {
        let e = Ellipse::from_circle(DVec2::new(1.0, 1.0), 6.0, DVec2::new(1.0, 3.0)).unwrap();
        // offset is +y, so the major axis points along +y
        assert!((e.rotation() - PI / 2.0).abs() < 1e-12);
        assert!((e.center() - DVec2::new(1.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn test_from_circle_concentric_is_circle() {
        let e = Ellipse::from_circle(DVec2::ZERO, 4.0, DVec2::ZERO).unwrap();
        assert!((e.semi_major() - 2.0).abs() < 1e-12);
        assert!((e.semi_minor() - 2.0).abs() < 1e-12);
        assert!(e.linear_eccentricity() < 1e-12);
    }

    #[test]
    fn test_from_circle_rejects_point_outside() {
        // eccentric point at distance >= radius has no real semi-minor axis
        let r = 3.0;
        assert!(matches!(
            Ellipse::from_circle(DVec2::ZERO, r, DVec2::new(3.0, 0.0)),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(matches!(
            Ellipse::from_circle(DVec2::ZERO, r, DVec2::new(0.0, -5.0)),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(matches!(
            Ellipse::from_circle(DVec2::ZERO, 0.0, DVec2::ZERO),
            Err(KernelError::InvalidParameter(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_focus_sum_is_major_axis(
            a in 0.5f64..50.0,
            ratio in 0.05f64..1.0,
            rotation in -PI..PI,
            t in -3.0f64..3.0,
        ) {
            let b = a * ratio;
            let e = Ellipse::from_semi_axes(DVec2::new(1.5, -0.5), a, b, rotation).unwrap();
            let p = e.point_from_proportion(t);
            let (f1, f2) = e.foci();
            let sum = (p - f1).length() + (p - f2).length();
            prop_assert!((sum - 2.0 * a).abs() <= 1e-9 * (2.0 * a).max(1.0));
        }

        #[test]
        fn prop_modulo_wrap_invariance(
            t in -5.0f64..5.0,
            rotation in -PI..PI,
        ) {
            let e = Ellipse::from_semi_axes(DVec2::ZERO, 5.0, 3.0, rotation).unwrap();
            let p = e.point_from_proportion(t);
            let p_wrapped = e.point_from_proportion(t.rem_euclid(1.0));
            let p_shifted = e.point_from_proportion(t + 1.0);
            prop_assert!((p - p_wrapped).length() < 1e-9);
            prop_assert!((p - p_shifted).length() < 1e-9);
        }

        #[test]
        fn prop_circle_construction_point_inside_is_valid(
            radius in 0.5f64..20.0,
            frac in 0.0f64..0.999,
            angle in -PI..PI,
        ) {
            let e_point = crate::polar_to_cartesian(radius * frac, angle);
            let e = Ellipse::from_circle(DVec2::ZERO, radius, e_point).unwrap();
            // derived axes always satisfy the construction identities
            prop_assert!((e.semi_major() - radius / 2.0).abs() < 1e-12);
            prop_assert!(
                (e.linear_eccentricity() - e_point.length() / 2.0).abs() < 1e-9
            );
        }
    }
}
