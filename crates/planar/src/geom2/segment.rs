//! Bounded segments: a `Line` restricted to the box spanned by two endpoints.
//!
//! Invariants
//! - `x_range`/`y_range` are the closed hull of the endpoint coordinates,
//!   computed once in `Segment::new` (order-independent).
//! - A point on the underlying line and inside both ranges lies on the segment.
//!
//! Absence is explicit: out-of-range coordinates and missed intersections are
//! `None` rather than NaN.

use super::line::Line;
use super::point::Point;

/// Closed interval `[lo, hi]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// Interval spanned by two values in either order.
    #[inline]
    pub fn spanning(a: f64, b: f64) -> Self {
        if a > b {
            Self { lo: b, hi: a }
        } else {
            Self { lo: a, hi: b }
        }
    }

    /// Inclusive membership; NaN is never contained.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.lo <= v && v <= self.hi
    }
}

/// Segment between `start` and `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    line: Line,
    start: Point,
    end: Point,
    length: f64,
    x_range: Interval,
    y_range: Interval,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            line: Line::from_two_points(start, end),
            start,
            end,
            length: Point::distance(start, end),
            x_range: Interval::spanning(start.x, end.x),
            y_range: Interval::spanning(start.y, end.y),
        }
    }

    #[inline]
    pub fn line(&self) -> &Line {
        &self.line
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn x_range(&self) -> Interval {
        self.x_range
    }

    #[inline]
    pub fn y_range(&self) -> Interval {
        self.y_range
    }

    /// Inclusive bounding-box membership.
    #[inline]
    pub fn bbox_contains(&self, p: Point) -> bool {
        self.x_range.contains(p.x) && self.y_range.contains(p.y)
    }

    /// x on the segment at ordinate `y`, if it falls inside `x_range`.
    #[inline]
    pub fn coord_x_from_y(&self, y: f64) -> Option<f64> {
        let x = self.line.coord_x_from_y(y);
        self.x_range.contains(x).then_some(x)
    }

    /// y on the segment at abscissa `x`, if it falls inside `y_range`.
    #[inline]
    pub fn coord_y_from_x(&self, x: f64) -> Option<f64> {
        let y = self.line.coord_y_from_x(x);
        self.y_range.contains(y).then_some(y)
    }

    /// Intersection of two segments; must lie in both bounding boxes.
    pub fn intersect(a: &Segment, b: &Segment) -> Option<Point> {
        Line::intersect(&a.line, &b.line).filter(|p| a.bbox_contains(*p) && b.bbox_contains(*p))
    }

    /// Intersection of a segment with an infinite line; only the segment's box is checked.
    pub fn intersect_line(seg: &Segment, line: &Line) -> Option<Point> {
        Line::intersect(&seg.line, line).filter(|p| seg.bbox_contains(*p))
    }

    /// `intersect_line` with vertex disambiguation for ray casting.
    ///
    /// A hit exactly on an endpoint is kept only when the other endpoint lies
    /// strictly below it. Two sides sharing a vertex on the test line thus
    /// report that vertex at most once per boundary transition.
    pub fn intersect_special(seg: &Segment, line: &Line) -> Option<Point> {
        let p = Segment::intersect_line(seg, line)?;
        if p == seg.start && seg.start.y <= seg.end.y {
            return None;
        }
        if p == seg.end && seg.end.y <= seg.start.y {
            return None;
        }
        Some(p)
    }

    /// `intersect_line` over `segments`, in input order, without dedup.
    pub fn intersect_all<'a, I>(segments: I, line: &Line) -> Vec<Point>
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        segments
            .into_iter()
            .filter_map(|s| Segment::intersect_line(s, line))
            .collect()
    }

    /// `intersect_special` over `segments`, in input order, without dedup.
    pub fn intersect_all_special<'a, I>(segments: I, line: &Line) -> Vec<Point>
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        segments
            .into_iter()
            .filter_map(|s| Segment::intersect_special(s, line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Orientation;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn horizontal(y: f64) -> Line {
        Line::from_point_and_orientation(p(0.0, y), Orientation::ParallelToXAxis)
    }

    #[test]
    fn derived_fields_are_order_independent() {
        let s = Segment::new(p(4.0, -1.0), p(1.0, 3.0));
        assert_eq!(s.x_range(), Interval { lo: 1.0, hi: 4.0 });
        assert_eq!(s.y_range(), Interval { lo: -1.0, hi: 3.0 });
        assert!((s.length() - 5.0).abs() < 1e-12);
        let r = Segment::new(p(1.0, 3.0), p(4.0, -1.0));
        assert_eq!(s.x_range(), r.x_range());
        assert_eq!(s.y_range(), r.y_range());
    }

    #[test]
    fn coordinates_outside_range_are_none() {
        let s = Segment::new(p(0.0, 0.0), p(2.0, 4.0));
        assert_eq!(s.coord_y_from_x(1.0), Some(2.0));
        assert_eq!(s.coord_y_from_x(2.0), Some(4.0));
        assert_eq!(s.coord_y_from_x(3.0), None);
        assert_eq!(s.coord_x_from_y(2.0), Some(1.0));
        assert_eq!(s.coord_x_from_y(-0.5), None);
    }

    #[test]
    fn vertical_segment_coordinates() {
        let s = Segment::new(p(1.0, 0.0), p(1.0, 2.0));
        assert_eq!(s.coord_x_from_y(1.0), Some(1.0));
        // The underlying line returns +inf, which no range contains.
        assert_eq!(s.coord_y_from_x(1.0), None);
    }

    #[test]
    fn segment_segment_intersection_respects_both_boxes() {
        let a = Segment::new(p(0.0, 0.0), p(4.0, 4.0));
        let b = Segment::new(p(0.0, 4.0), p(4.0, 0.0));
        assert_eq!(Segment::intersect(&a, &b), Some(p(2.0, 2.0)));
        // Lines meet at (2,2) but the short segment stops before it.
        let c = Segment::new(p(0.0, 4.0), p(1.0, 3.0));
        assert_eq!(Segment::intersect(&a, &c), None);
        assert_eq!(Segment::intersect(&c, &a), None);
    }

    #[test]
    fn touching_endpoints_intersect_inclusively() {
        let a = Segment::new(p(0.0, 0.0), p(2.0, 2.0));
        let b = Segment::new(p(2.0, 2.0), p(4.0, 0.0));
        assert_eq!(Segment::intersect(&a, &b), Some(p(2.0, 2.0)));
    }

    #[test]
    fn segment_line_checks_only_segment_box() {
        let s = Segment::new(p(0.0, 0.0), p(2.0, 2.0));
        assert_eq!(Segment::intersect_line(&s, &horizontal(1.0)), Some(p(1.0, 1.0)));
        assert_eq!(Segment::intersect_line(&s, &horizontal(3.0)), None);
        let v = Segment::new(p(5.0, -1.0), p(5.0, 1.0));
        assert_eq!(Segment::intersect_line(&v, &horizontal(0.0)), Some(p(5.0, 0.0)));
        // Horizontal segment on a horizontal line: parallel, no hit.
        let h = Segment::new(p(0.0, 1.0), p(3.0, 1.0));
        assert_eq!(Segment::intersect_line(&h, &horizontal(1.0)), None);
    }

    #[test]
    fn special_drops_endpoint_when_other_end_not_below() {
        let line = horizontal(0.0);
        // Other endpoint above: dropped.
        let up = Segment::new(p(0.0, 0.0), p(1.0, 2.0));
        assert_eq!(Segment::intersect_line(&up, &line), Some(p(0.0, 0.0)));
        assert_eq!(Segment::intersect_special(&up, &line), None);
        let up_rev = Segment::new(p(1.0, 2.0), p(0.0, 0.0));
        assert_eq!(Segment::intersect_special(&up_rev, &line), None);
        // Other endpoint below: kept.
        let down = Segment::new(p(0.0, 0.0), p(1.0, -2.0));
        assert_eq!(Segment::intersect_special(&down, &line), Some(p(0.0, 0.0)));
        let down_rev = Segment::new(p(1.0, -2.0), p(0.0, 0.0));
        assert_eq!(Segment::intersect_special(&down_rev, &line), Some(p(0.0, 0.0)));
        // Interior crossings are untouched.
        let cross = Segment::new(p(0.0, -1.0), p(0.0, 1.0));
        assert_eq!(Segment::intersect_special(&cross, &line), Some(p(0.0, 0.0)));
    }

    #[test]
    fn batch_forms_keep_order_and_duplicates() {
        let line = horizontal(0.0);
        let sides = [
            Segment::new(p(0.0, -1.0), p(1.0, 0.0)),
            Segment::new(p(1.0, 0.0), p(0.0, 1.0)),
            Segment::new(p(5.0, 5.0), p(6.0, 6.0)),
            Segment::new(p(-1.0, 1.0), p(-1.0, -1.0)),
        ];
        assert_eq!(
            Segment::intersect_all(&sides, &line),
            vec![p(1.0, 0.0), p(1.0, 0.0), p(-1.0, 0.0)]
        );
        assert_eq!(
            Segment::intersect_all_special(&sides, &line),
            vec![p(1.0, 0.0), p(-1.0, 0.0)]
        );
        assert!(Segment::intersect_all(&[] as &[Segment], &line).is_empty());
    }
}
