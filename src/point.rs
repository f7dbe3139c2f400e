//! 2D points.

use std::fmt;

use glam::{DVec2, dvec2};

/// A 2D coordinate.
///
/// Transformations mutate in place and always compute from the
/// pre-mutation coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn as_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    /// Rotate about the origin by `theta` radians, counter-clockwise.
    pub fn rotate(&mut self, theta: f64) {
        *self = DVec2::from_angle(theta).rotate(self.as_dvec2()).into();
    }

    /// Move by a relative offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Format a coordinate with two decimals. Anything that rounds to zero
/// prints as `0.00`, never `-0.00`.
pub(crate) fn fmt_coord(value: f64) -> String {
    let s = format!("{:.2}", value);
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G1 X{} Y{}", fmt_coord(self.x), fmt_coord(self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(p: Point, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    #[test]
    fn rotate_quarter_turn() {
        let mut p = Point::new(1.0, 0.0);
        p.rotate(FRAC_PI_2);
        assert_close(p, 0.0, 1.0);
        p.rotate(FRAC_PI_2);
        assert_close(p, -1.0, 0.0);
    }

    #[test]
    fn rotate_uses_original_coordinates() {
        // x' must not feed into y'
        let mut p = Point::new(3.0, 4.0);
        p.rotate(PI / 3.0);
        let (s, c) = (PI / 3.0).sin_cos();
        assert_close(p, 3.0 * c - 4.0 * s, 3.0 * s + 4.0 * c);
    }

    #[test]
    fn rotate_round_trip() {
        let original = Point::new(12.5, -7.25);
        let mut p = original;
        p.rotate(1.234);
        p.rotate(-1.234);
        assert_close(p, original.x, original.y);
    }

    #[test]
    fn translate_adds_offset() {
        let mut p = Point::new(1.0, 2.0);
        p.translate(-0.5, 3.0);
        assert_eq!(p, Point::new(0.5, 5.0));
    }

    #[test]
    fn clone_is_independent() {
        let a = Point::new(1.0, 1.0);
        let mut b = a;
        b.translate(1.0, 1.0);
        assert_eq!(a, Point::new(1.0, 1.0));
        assert_eq!(b, Point::new(2.0, 2.0));
    }

    #[test]
    fn display_as_g1() {
        assert_eq!(Point::new(1.005, -12.3456).to_string(), "G1 X1.00 Y-12.35");
        assert_eq!(Point::new(3.0, 0.5).to_string(), "G1 X3.00 Y0.50");
    }

    #[test]
    fn display_never_negative_zero() {
        assert_eq!(Point::new(-1e-16, -0.004).to_string(), "G1 X0.00 Y0.00");
        assert_eq!(Point::new(-0.0, -0.006).to_string(), "G1 X0.00 Y-0.01");
    }
}
