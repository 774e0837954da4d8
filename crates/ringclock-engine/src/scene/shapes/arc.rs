use core::f32::consts::{FRAC_PI_2, TAU};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Annular sector ("ring segment") draw payload.
///
/// The segment lies between `inner_radius` and `outer_radius` around `center`
/// and sweeps clockwise from 12 o'clock. `fraction` maps to the sweep:
/// `0.0` is empty, `1.0` is the full ring. Values outside `[0, 1]` are accepted
/// as-is and clamped when the arc is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub fraction: f32,
    pub color: Color,
}

impl ArcCmd {
    #[inline]
    pub fn new(
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        fraction: f32,
        color: Color,
    ) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            fraction,
            color,
        }
    }

    /// Signed sweep angle in radians, `-2π · fraction`.
    ///
    /// Uses the mathematical (Y-up) orientation: negative angles turn clockwise.
    #[inline]
    pub fn sweep_angle(&self) -> f32 {
        -TAU * self.fraction
    }

    /// Returns the drawable form of this arc.
    ///
    /// - radii given in the wrong order are swapped
    /// - a negative inner radius is raised to zero
    /// - `fraction` is clamped to `[0, 1]`
    ///
    /// Returns `None` for non-finite input or a zero-width band.
    pub fn normalized(&self) -> Option<ArcCmd> {
        if !(self.center.is_finite()
            && self.inner_radius.is_finite()
            && self.outer_radius.is_finite()
            && self.fraction.is_finite()
            && self.color.is_finite())
        {
            return None;
        }

        let (inner, outer) = if self.inner_radius <= self.outer_radius {
            (self.inner_radius, self.outer_radius)
        } else {
            (self.outer_radius, self.inner_radius)
        };
        let inner = inner.max(0.0);
        if outer <= inner {
            return None;
        }

        Some(ArcCmd {
            center: self.center,
            inner_radius: inner,
            outer_radius: outer,
            fraction: self.fraction.clamp(0.0, 1.0),
            color: self.color,
        })
    }

    /// Whether the arc covers any pixels. Expects a [`normalized`](Self::normalized) arc.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.fraction > 0.0 && self.color.a > 0.0
    }

    /// Point on the circle of `radius` reached after turning `angle` (Y-up radians)
    /// from 12 o'clock.
    #[inline]
    pub fn point_at(&self, radius: f32, angle: f32) -> Vec2 {
        // Screen Y points down, so the Y-up angle is mirrored.
        self.center.polar(radius, -(FRAC_PI_2 + angle))
    }

    /// Closed outline of the arc as a polygon in logical pixels.
    ///
    /// Traversal: inner radius at the top, straight up to the outer radius, along
    /// the outer circle by the sweep, inward to the inner radius at the end angle,
    /// and back along the inner circle; the last edge returns to the first point.
    ///
    /// `segments_per_turn` sets the flattening density of a full circle. A zero
    /// fraction yields a zero-area outline. Returns an empty outline when
    /// [`normalized`](Self::normalized) rejects the arc.
    ///
    /// The GPU renderer never tessellates; `arc.wgsl` covers the region this
    /// outline bounds. The outline is the CPU reference for that shader.
    pub fn outline(&self, segments_per_turn: u32) -> Vec<Vec2> {
        let Some(arc) = self.normalized() else {
            return Vec::new();
        };

        let sweep = arc.sweep_angle();
        let steps = ((segments_per_turn.max(3) as f32) * arc.fraction).ceil().max(1.0) as usize;
        let (r1, r2) = (arc.inner_radius, arc.outer_radius);
        let at = |i: usize| sweep * i as f32 / steps as f32;

        let mut points = Vec::with_capacity(2 * steps + 2);
        points.push(arc.point_at(r1, 0.0));
        points.push(arc.point_at(r2, 0.0));
        points.extend((1..=steps).map(|i| arc.point_at(r2, at(i))));
        points.push(arc.point_at(r1, sweep));
        points.extend((1..steps).rev().map(|i| arc.point_at(r1, at(i))));
        points
    }

    /// Whether `p` lies inside the filled arc (edges inclusive).
    ///
    /// CPU reference for the coverage `arc.wgsl` computes, without
    /// anti-aliasing.
    pub fn contains(&self, p: Vec2) -> bool {
        let Some(arc) = self.normalized() else {
            return false;
        };

        let d = p - arc.center;
        let r = d.length();
        if r < arc.inner_radius || r > arc.outer_radius || arc.fraction <= 0.0 {
            return false;
        }
        if arc.fraction >= 1.0 {
            return true;
        }

        clockwise_angle(d) <= arc.fraction * TAU
    }
}

/// Clockwise angle of offset `d` from 12 o'clock, in `[0, 2π)`.
#[inline]
fn clockwise_angle(d: Vec2) -> f32 {
    let phi = d.x.atan2(-d.y);
    if phi < 0.0 { phi + TAU } else { phi }
}

impl DrawList {
    /// Records an arc draw command.
    #[inline]
    pub fn push_arc(
        &mut self,
        z: ZIndex,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        fraction: f32,
        color: Color,
    ) {
        self.push(
            z,
            DrawCmd::Arc(ArcCmd::new(center, inner_radius, outer_radius, fraction, color)),
        );
    }
}
