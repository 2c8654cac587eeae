//! Multi-subpath polyline drawings.

use plancad_kernel_math::{Bounds2, Point2};
use serde::{Deserialize, Serialize};

use crate::types::Point2D;

/// Ordered collection of independent polyline strokes.
///
/// Each subpath is its own point list; nothing connects the last point of
/// one subpath to the first point of the next. Subpaths with fewer than two
/// points are kept while building but never yielded by [`Self::subpaths`].
///
/// Coordinates are taken as given. Templates compute final (scaled)
/// positions themselves; sheet placement happens with [`Self::translated`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathDescriptor {
    strokes: Vec<Vec<Point2D>>,
}

impl PathDescriptor {
    /// Create an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath. Consecutive calls do not stack empty subpaths.
    pub fn begin_subpath(&mut self) -> &mut Self {
        if self.strokes.last().map_or(true, |s| !s.is_empty()) {
            self.strokes.push(Vec::new());
        }
        self
    }

    /// Append a point to the current subpath, starting one if needed.
    ///
    /// # Panics
    ///
    /// Panics on a non-finite coordinate. Every template computes points from
    /// validated dimensions, so a NaN here is a bug in the caller.
    pub fn point(&mut self, x: f64, y: f64) -> &mut Self {
        assert!(
            x.is_finite() && y.is_finite(),
            "non-finite path coordinate ({x}, {y})"
        );
        if self.strokes.is_empty() {
            self.strokes.push(Vec::new());
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(Point2D::new(x, y));
        }
        self
    }

    /// Begin a subpath and append all points.
    pub fn polyline<I>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.begin_subpath();
        for (x, y) in points {
            self.point(x, y);
        }
        self
    }

    /// Closed axis-aligned rectangle from `(x0, y0)` to `(x1, y1)`.
    pub fn rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> &mut Self {
        self.polyline([(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)])
    }

    /// Closed square of side `size` centered on `(cx, cy)`.
    pub fn square(&mut self, cx: f64, cy: f64, size: f64) -> &mut Self {
        let h = size / 2.0;
        self.rect(cx - h, cy - h, cx + h, cy + h)
    }

    /// Single straight stroke.
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> &mut Self {
        self.polyline([(x0, y0), (x1, y1)])
    }

    /// Closed polygon approximating a circle, starting at `+x`.
    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, segments: u32) -> &mut Self {
        let n = segments.max(3);
        self.polyline((0..=n).map(|i| {
            let a = std::f64::consts::TAU * f64::from(i % n) / f64::from(n);
            (cx + radius * a.cos(), cy + radius * a.sin())
        }))
    }

    /// Drawable subpaths, in insertion order.
    pub fn subpaths(&self) -> impl Iterator<Item = &[Point2D]> {
        self.strokes
            .iter()
            .filter(|s| s.len() >= 2)
            .map(Vec::as_slice)
    }

    /// Number of drawable subpaths.
    pub fn len(&self) -> usize {
        self.subpaths().count()
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append every drawable subpath of `other`.
    pub fn extend(&mut self, other: &PathDescriptor) {
        self.strokes.retain(|s| !s.is_empty());
        self.strokes.extend(other.subpaths().map(<[Point2D]>::to_vec));
    }

    /// Copy of the drawable subpaths, shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> PathDescriptor {
        PathDescriptor {
            strokes: self
                .subpaths()
                .map(|s| s.iter().map(|p| Point2D::new(p.x + dx, p.y + dy)).collect())
                .collect(),
        }
    }

    /// Bounds of every drawable point, or `None` for an empty drawing.
    pub fn bounds(&self) -> Option<Bounds2> {
        let mut points = self.subpaths().flatten();
        let first = points.next()?;
        let mut b = Bounds2::from_point(Point2::new(first.x, first.y));
        for p in points {
            b.include(Point2::new(p.x, p.y));
        }
        Some(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_subpaths_are_dropped() {
        let mut path = PathDescriptor::new();
        path.begin_subpath().point(0.0, 0.0);
        path.begin_subpath().point(1.0, 1.0).point(2.0, 2.0);
        path.polyline(Vec::<(f64, f64)>::new());
        path.polyline([(5.0, 5.0)]);

        assert_eq!(path.len(), 1);
        let only: Vec<_> = path.subpaths().collect();
        assert_eq!(only[0], &[Point2D::new(1.0, 1.0), Point2D::new(2.0, 2.0)][..]);
    }

    #[test]
    fn test_point_without_begin() {
        let mut path = PathDescriptor::new();
        path.point(0.0, 0.0).point(1.0, 0.0);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_rect_is_closed() {
        let mut path = PathDescriptor::new();
        path.rect(0.0, 0.0, 2.0, 1.0);
        let stroke = path.subpaths().next().unwrap();
        assert_eq!(stroke.len(), 5);
        assert_eq!(stroke.first(), stroke.last());
    }

    #[test]
    fn test_circle_closes() {
        let mut path = PathDescriptor::new();
        path.circle(1.0, 1.0, 0.5, 16);
        let stroke = path.subpaths().next().unwrap();
        assert_eq!(stroke.len(), 17);
        assert!(stroke[0].distance(&stroke[16]) < 1e-12);
        assert!(stroke.iter().all(|p| (p.distance(&Point2D::new(1.0, 1.0)) - 0.5).abs() < 1e-12));
    }

    #[test]
    fn test_translate_and_bounds() {
        let mut path = PathDescriptor::new();
        path.rect(0.0, 0.0, 2.0, 1.0).line(0.0, 3.0, 1.0, 3.0);
        let moved = path.translated(10.0, 20.0);
        let b = moved.bounds().unwrap();
        assert_eq!((b.min.x, b.min.y, b.max.x, b.max.y), (10.0, 20.0, 12.0, 23.0));
        assert!(PathDescriptor::new().bounds().is_none());
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut a = PathDescriptor::new();
        a.line(0.0, 0.0, 1.0, 0.0);
        let mut b = PathDescriptor::new();
        b.line(0.0, 1.0, 1.0, 1.0).begin_subpath().point(9.0, 9.0);
        a.extend(&b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    #[should_panic(expected = "non-finite")]
    fn test_nan_panics() {
        PathDescriptor::new().point(f64::NAN, 0.0);
    }
}
