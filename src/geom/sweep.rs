//! Partial-arc sampling and swept-area boundaries
//!
//! Supports the equal-areas-in-equal-times picture: a driving scene
//! samples the stretch of boundary a body covered over some interval
//! and fills the region bounded by the arc and the two focus radii.

use glam::DVec2;

use super::ellipse::Ellipse;
use crate::consts::ARC_SAMPLES_PER_TURN;
use crate::wrap_proportion;

/// Lazy iterator over boundary samples between two parameters
///
/// Walks in the increasing-`t` direction from `t1` to `t2`, wrapping
/// through 0 when `t2 < t1 (mod 1)`. Stateless beyond its inputs:
/// clone it to restart.
#[derive(Debug, Clone)]
pub struct PartialArc<'a> {
    ellipse: &'a Ellipse,
    start: f64,
    span: f64,
    samples: usize,
    index: usize,
}

impl<'a> Iterator for PartialArc<'a> {
    type Item = DVec2;

    fn next(&mut self) -> Option<DVec2> {
        if self.index >= self.samples {
            return None;
        }
        let t = if self.samples == 1 {
            self.start
        } else {
            self.start + self.span * self.index as f64 / (self.samples - 1) as f64
        };
        self.index += 1;
        Some(self.ellipse.point_from_proportion(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PartialArc<'_> {}

impl Ellipse {
    /// Sample the boundary from parameter `t1` to `t2`
    ///
    /// Sample density is fixed per full turn
    /// ([`ARC_SAMPLES_PER_TURN`]), so short arcs get proportionally
    /// fewer points, always including both endpoints. A zero span
    /// (`t1 ≡ t2 (mod 1)`) yields exactly one point,
    /// `point_from_proportion(t1)`.
    pub fn partial_arc(&self, t1: f64, t2: f64) -> PartialArc<'_> {
        let span = wrap_proportion(t2 - t1);
        let samples = if span == 0.0 {
            1
        } else {
            ((span * ARC_SAMPLES_PER_TURN as f64).ceil() as usize + 1).max(2)
        };
        PartialArc {
            ellipse: self,
            start: t1,
            span,
            samples,
            index: 0,
        }
    }

    /// Boundary of the region swept between `t1` and `t2` as seen from
    /// `focus`: the focus itself, then the arc samples. The two
    /// focus-to-boundary radii are the implicit closing edges of the
    /// polygon. Degenerates to the single boundary point when
    /// `t1 ≡ t2 (mod 1)`. Visualization-only; the kernel attaches no
    /// area value to it.
    pub fn swept_area_boundary(&self, t1: f64, t2: f64, focus: DVec2) -> Vec<DVec2> {
        let arc = self.partial_arc(t1, t2);
        if arc.len() == 1 {
            return vec![self.point_from_proportion(t1)];
        }
        std::iter::once(focus).chain(arc).collect()
    }
}
