//! Ordered point sequences and the transformations the generator applies to
//! them.

use std::fmt;

use glam::DVec2;

use crate::point::Point;
use crate::render::Renderer;

/// An ordered polyline. Renderers close it from last point back to first.
///
/// A path owns its points; [`Path::extend`] and [`Clone`] copy them, so two
/// paths never share a point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn new() -> Self {
        Path { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Path {
            points: points.into_iter().collect(),
        }
    }

    /// Add a point to the end.
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Add a copy of every point of `other`, in order.
    pub fn extend(&mut self, other: &Path) {
        self.points.extend_from_slice(&other.points);
    }

    /// Rotate every point about the origin by `theta` radians.
    pub fn rotate(&mut self, theta: f64) {
        let rotation = DVec2::from_angle(theta);
        for point in &mut self.points {
            *point = rotation.rotate(point.as_dvec2()).into();
        }
    }

    /// Negate every y coordinate.
    pub fn mirror_across_x_axis(&mut self) {
        for point in &mut self.points {
            point.y = -point.y;
        }
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Axis-aligned bounding box, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.points.iter();
        let mut bounds = Bounds::at(*points.next()?);
        for point in points {
            bounds.expand_point(*point);
        }
        Some(bounds)
    }

    /// Trace the path as one closed subpath.
    ///
    /// An empty path makes no renderer calls at all.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let Some((first, rest)) = self.points.split_first() else {
            crate::log::trace!("skipping draw of empty path");
            return;
        };

        renderer.begin_path();
        renderer.move_to(first.x, first.y);
        for point in rest {
            renderer.line_to(point.x, point.y);
        }
        renderer.close_path();
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Path::from_points(iter)
    }
}

/// One `G1` line per point.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            writeln!(f, "{}", point)?;
        }
        Ok(())
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// A zero-sized box around one point.
    pub fn at(point: Point) -> Self {
        let p = point.as_dvec2();
        Bounds { min: p, max: p }
    }

    pub fn expand_point(&mut self, point: Point) {
        let p = point.as_dvec2();
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordingRenderer, RenderCommand};
    use std::f64::consts::PI;

    fn sample() -> Path {
        Path::from_points([
            Point::new(1.0, 2.0),
            Point::new(3.0, -4.0),
            Point::new(-5.5, 0.25),
        ])
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut path = Path::new();
        path.append(Point::new(0.0, 0.0));
        path.append(Point::new(1.0, 0.0));
        path.append(Point::new(1.0, 1.0));
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(Point::new(0.0, 0.0)));
        assert_eq!(path.last(), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn extend_copies_without_touching_source() {
        let source = sample();
        let mut target = Path::from_points([Point::new(9.0, 9.0)]);
        target.extend(&source);
        assert_eq!(target.len(), 4);
        assert_eq!(&target.points()[1..], source.points());

        target.mirror_across_x_axis();
        assert_eq!(source, sample());
    }

    #[test]
    fn clone_is_deep() {
        let original = sample();
        let mut copy = original.clone();
        copy.rotate(PI / 2.0);
        copy.reverse();
        assert_eq!(original, sample());
        assert_ne!(copy, original);
    }

    #[test]
    fn rotate_then_unrotate_is_identity() {
        let mut path = sample();
        path.rotate(0.7);
        path.rotate(-0.7);
        for (got, want) in path.iter().zip(sample().iter()) {
            assert!((got.x - want.x).abs() < 1e-9);
            assert!((got.y - want.y).abs() < 1e-9);
        }
    }

    #[test]
    fn rotate_matches_point_rotate() {
        let mut path = sample();
        path.rotate(-1.1);
        for (got, mut want) in path.iter().zip(sample().iter().copied()) {
            want.rotate(-1.1);
            assert!((got.x - want.x).abs() < 1e-12);
            assert!((got.y - want.y).abs() < 1e-12);
        }
    }

    #[test]
    fn mirror_twice_restores_y() {
        let mut path = sample();
        path.mirror_across_x_axis();
        assert_eq!(path.points()[1], Point::new(3.0, 4.0));
        path.mirror_across_x_axis();
        assert_eq!(path, sample());
    }

    #[test]
    fn reverse_twice_restores_order() {
        let mut path = sample();
        path.reverse();
        assert_eq!(path.first(), Some(Point::new(-5.5, 0.25)));
        path.reverse();
        assert_eq!(path, sample());
    }

    #[test]
    fn bounds_cover_every_point() {
        let bounds = sample().bounds().unwrap();
        assert_eq!(bounds.min, glam::dvec2(-5.5, -4.0));
        assert_eq!(bounds.max, glam::dvec2(3.0, 2.0));
        assert_eq!(bounds.width(), 8.5);
        assert_eq!(bounds.height(), 6.0);
        assert!(Path::new().bounds().is_none());
    }

    #[test]
    fn draw_order_is_begin_move_lines_close() {
        let mut recorder = RecordingRenderer::new();
        sample().draw(&mut recorder);
        assert_eq!(
            recorder.commands(),
            &[
                RenderCommand::BeginPath,
                RenderCommand::MoveTo(1.0, 2.0),
                RenderCommand::LineTo(3.0, -4.0),
                RenderCommand::LineTo(-5.5, 0.25),
                RenderCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn draw_empty_path_is_noop() {
        let mut recorder = RecordingRenderer::new();
        Path::new().draw(&mut recorder);
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn display_one_line_per_point() {
        assert_eq!(
            sample().to_string(),
            "G1 X1.00 Y2.00\nG1 X3.00 Y-4.00\nG1 X-5.50 Y0.25\n"
        );
        assert_eq!(Path::new().to_string(), "");
    }
}
