//! Infinite lines in slope/intercept form with an explicit vertical case.
//!
//! A line is either `Ordinary` (`y = slope·x + intercept`, finite slope) or
//! `Vertical` (`x = const`). The tag replaces an infinite-slope sentinel: every
//! method branches on the variant, never on `is_infinite()` of a stored value.

use super::point::Point;

/// Orientation tag for lines built through a single point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Horizontal: slope 0 through the point.
    ParallelToXAxis,
    /// Vertical: constant x through the point.
    ParallelToYAxis,
}

/// Infinite line in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    Ordinary { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl Line {
    /// Line through `p1` and `p2`.
    ///
    /// The slope is the raw quotient `(p1.y − p2.y)/(p1.x − p2.x)`; any infinite
    /// quotient (either sign) makes the line vertical at `p1.x`. Coincident
    /// points give `0/0 = NaN` and an ordinary line with NaN fields.
    pub fn from_two_points(p1: Point, p2: Point) -> Self {
        let slope = (p1.y - p2.y) / (p1.x - p2.x);
        if slope.is_infinite() {
            Line::Vertical { x: p1.x }
        } else {
            Line::Ordinary {
                slope,
                intercept: p1.y - slope * p1.x,
            }
        }
    }

    pub fn from_point_and_orientation(p: Point, orientation: Orientation) -> Self {
        match orientation {
            Orientation::ParallelToXAxis => Line::Ordinary {
                slope: 0.0,
                intercept: p.y,
            },
            Orientation::ParallelToYAxis => Line::Vertical { x: p.x },
        }
    }

    /// Slope; `f64::INFINITY` for a vertical line.
    #[inline]
    pub fn slope(&self) -> f64 {
        match *self {
            Line::Ordinary { slope, .. } => slope,
            Line::Vertical { .. } => f64::INFINITY,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    #[inline]
    pub fn coord_x_from_y(&self, y: f64) -> f64 {
        match *self {
            Line::Ordinary { slope, intercept } => (y - intercept) / slope,
            Line::Vertical { x } => x,
        }
    }

    /// y at abscissa `x`.
    ///
    /// A vertical line has no y for a given x; it returns its slope
    /// (`f64::INFINITY`), which callers must not interpret.
    #[inline]
    pub fn coord_y_from_x(&self, x: f64) -> f64 {
        match *self {
            Line::Ordinary { slope, intercept } => slope * x + intercept,
            Line::Vertical { .. } => f64::INFINITY,
        }
    }

    /// Intersection of two lines.
    ///
    /// Equal slopes give `None`, including coincident lines and any two
    /// vertical lines.
    pub fn intersect(a: &Line, b: &Line) -> Option<Point> {
        match (*a, *b) {
            (Line::Vertical { .. }, Line::Vertical { .. }) => None,
            (Line::Vertical { x }, other) | (other, Line::Vertical { x }) => {
                Some(Point::new(x, other.coord_y_from_x(x)))
            }
            (
                Line::Ordinary {
                    slope: s1,
                    intercept: b1,
                },
                Line::Ordinary {
                    slope: s2,
                    intercept: b2,
                },
            ) => {
                if s1 == s2 {
                    return None;
                }
                let x = (b2 - b1) / (s1 - s2);
                Some(Point::new(x, a.coord_y_from_x(x)))
            }
        }
    }
}
