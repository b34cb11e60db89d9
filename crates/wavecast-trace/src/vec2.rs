//! Planar vectors.

use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector with f64 components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// Both components one.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    /// Unit vector pointing up.
    pub const UP: Self = Self { x: 0.0, y: 1.0 };
    /// Unit vector pointing down.
    pub const DOWN: Self = Self { x: 0.0, y: -1.0 };
    /// Unit vector pointing right.
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };
    /// Unit vector pointing left.
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };

    /// Creates a vector from components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector from a polar angle (radians) and magnitude.
    pub fn from_angle(radians: f64, magnitude: f64) -> Self {
        Self {
            x: radians.cos() * magnitude,
            y: radians.sin() * magnitude,
        }
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalized(self) -> Self {
        let len = self.magnitude();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// Perpendicular vector, rotated a quarter turn counterclockwise.
    pub fn tangent(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Polar angle in radians.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Distance to another point.
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).magnitude()
    }

    /// Signed length of this vector's projection onto `onto`.
    pub fn scalar_projection(self, onto: Self) -> f64 {
        self.dot(onto.normalized())
    }

    /// Vector projection onto `onto`.
    pub fn project_onto(self, onto: Self) -> Self {
        let unit = onto.normalized();
        unit * self.dot(unit)
    }

    /// Mirrors this vector across the axis of `normal`.
    ///
    /// `normal` is expected to be unit length.
    pub fn reflect(self, normal: Self) -> Self {
        let projection = normal * self.dot(normal);
        projection * 2.0 - self
    }

    /// Rotates by the given angle in radians, preserving magnitude.
    pub fn rotate(self, radians: f64) -> Self {
        Self::from_angle(self.angle() + radians, self.magnitude())
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_constants_and_constructors() {
        assert_eq!(Vec2::ZERO, Vec2::new(0.0, 0.0));
        assert_eq!(Vec2::UP, Vec2::new(0.0, 1.0));
        assert_eq!(Vec2::LEFT, Vec2::new(-1.0, 0.0));

        let v = Vec2::from_angle(0.0, 2.0);
        assert!(approx(v, Vec2::new(2.0, 0.0)));

        let v = Vec2::from_angle(FRAC_PI_2, 3.0);
        assert!(approx(v, Vec2::new(0.0, 3.0)));
    }

    #[test]
    fn test_magnitude_and_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < EPS);
        assert!(approx(v.normalized(), Vec2::new(0.6, 0.8)));
        assert!((v.normalized().magnitude() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_zero_vector_stays_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn test_tangent_is_perpendicular() {
        let v = Vec2::new(2.0, 1.0);
        assert!(v.dot(v.tangent()).abs() < EPS);
        assert!(approx(Vec2::RIGHT.tangent(), Vec2::UP));
    }

    #[test]
    fn test_angle() {
        assert!((Vec2::RIGHT.angle() - 0.0).abs() < EPS);
        assert!((Vec2::UP.angle() - FRAC_PI_2).abs() < EPS);
        assert!((Vec2::LEFT.angle().abs() - PI).abs() < EPS);
    }

    #[test]
    fn test_dot_and_distance() {
        assert!((Vec2::new(1.0, 2.0).dot(Vec2::new(3.0, 4.0)) - 11.0).abs() < EPS);
        assert!((Vec2::new(1.0, 1.0).distance_to(Vec2::new(4.0, 5.0)) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_projection() {
        let v = Vec2::new(2.0, 2.0);
        assert!((v.scalar_projection(Vec2::RIGHT) - 2.0).abs() < EPS);
        assert!(approx(v.project_onto(Vec2::RIGHT), Vec2::new(2.0, 0.0)));
        // Projection onto a non-unit vector must not depend on its length.
        assert!(approx(
            v.project_onto(Vec2::new(5.0, 0.0)),
            Vec2::new(2.0, 0.0)
        ));
    }

    #[test]
    fn test_reflect_mirrors_across_normal_axis() {
        // Mirroring (1, 1) across the vertical axis flips x.
        let mirrored = Vec2::new(1.0, 1.0).reflect(Vec2::UP);
        assert!(approx(mirrored, Vec2::new(-1.0, 1.0)));

        // A vector along the normal is unchanged.
        assert!(approx(Vec2::UP.reflect(Vec2::UP), Vec2::UP));
    }

    #[test]
    fn test_rotate() {
        let v = Vec2::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert!(approx(v, Vec2::new(0.0, 1.0)));

        let v = Vec2::new(3.0, 4.0).rotate(PI);
        assert!(approx(v, Vec2::new(-3.0, -4.0)));
        assert!((v.magnitude() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }
}
