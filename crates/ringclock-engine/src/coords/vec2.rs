use core::ops::Sub;

/// 2D point or vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle` (radians, trigonometric
    /// convention: 0 = +X, positive angles rotate from +X toward +Y).
    #[inline]
    pub fn polar(self, radius: f32, angle: f32) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x + cos * radius, self.y + sin * radius)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn polar_zero_angle_points_right() {
        assert!(close(Vec2::new(10.0, 10.0).polar(5.0, 0.0), Vec2::new(15.0, 10.0)));
    }

    #[test]
    fn polar_minus_half_pi_points_up() {
        // +Y is down, so -π/2 lands above the origin.
        let p = Vec2::default().polar(3.0, -core::f32::consts::FRAC_PI_2);
        assert!(close(p, Vec2::new(0.0, -3.0)));
    }

    #[test]
    fn length_of_3_4() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
        assert!(Vec2::new(1.0, -1.0).is_finite());
    }
}
