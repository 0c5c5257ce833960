//! Polygon ring and crossing-number containment.
//!
//! Purpose
//! - Hold an ordered vertex ring and its sides (`n` sides for `n` vertices,
//!   closing `n−1 → 0`), both fixed at construction.
//! - Answer `contains` with the even–odd rule on a horizontal test line,
//!   counting crossings strictly left of the query point.
//!
//! Assumptions
//! - No validation: callers supply a simple ring. Fewer than three vertices or
//!   zero-length sides are accepted and yield whatever the formulas give.
//! - Holes, multiple rings and winding direction are out of scope.

use tracing::trace;

use super::line::{Line, Orientation};
use super::point::Point;
use super::segment::Segment;

/// Immutable polygon ring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    sides: Vec<Segment>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        let n = vertices.len();
        let sides = (0..n)
            .map(|k| Segment::new(vertices[k], vertices[(k + 1) % n]))
            .collect();
        Self { vertices, sides }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn sides(&self) -> &[Segment] {
        &self.sides
    }

    /// Number of vertices (equals the number of sides).
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Ray-casting hits on the horizontal line through `point`, after vertex
    /// disambiguation. Side order, duplicates kept.
    fn ray_hits(&self, point: Point) -> Vec<Point> {
        let horizontal = Line::from_point_and_orientation(point, Orientation::ParallelToXAxis);
        Segment::intersect_all_special(&self.sides, &horizontal)
    }

    /// Whether `point` lies exactly on some side.
    ///
    /// Probes the sides with the horizontal and the vertical line through
    /// `point`; a horizontal side is only ever met by the vertical probe and a
    /// vertical side only by the horizontal one.
    pub fn on_boundary(&self, point: Point) -> bool {
        [Orientation::ParallelToXAxis, Orientation::ParallelToYAxis]
            .into_iter()
            .map(|o| Line::from_point_and_orientation(point, o))
            .any(|probe| {
                self.sides
                    .iter()
                    .filter_map(|s| Segment::intersect_line(s, &probe))
                    .any(|hit| hit == point)
            })
    }

    /// Number of disambiguated crossings strictly left of `point` (`x < point.x`).
    pub fn crossings(&self, point: Point) -> usize {
        self.ray_hits(point)
            .iter()
            .filter(|hit| hit.x < point.x)
            .count()
    }

    /// Point-in-polygon test: `true` on the boundary or inside.
    pub fn contains(&self, point: Point) -> bool {
        let hits = self.ray_hits(point);
        if hits.iter().any(|hit| *hit == point) || self.on_boundary(point) {
            trace!(x = point.x, y = point.y, "contains: on boundary");
            return true;
        }
        let crossings = hits.iter().filter(|hit| hit.x < point.x).count();
        trace!(x = point.x, y = point.y, crossings, "contains");
        crossings % 2 == 1
    }

    /// `contains` for each point, in input order.
    pub fn contains_all<I>(&self, points: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().map(|p| self.contains(p)).collect()
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Polygon::new(vertices)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Polygon::new(iter.into_iter().collect())
    }
}
