//! Immutable 2D coordinate pair.

use nalgebra::Vector2;

/// Point in the plane.
///
/// Equality is exact on both coordinates (no tolerance); `-0.0 == 0.0` and
/// NaN never equals anything, as for plain `f64`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn add(a: Point, b: Point) -> Point {
        Point::new(a.x + b.x, a.y + b.y)
    }

    #[inline]
    pub fn subtract(a: Point, b: Point) -> Point {
        Point::new(a.x - b.x, a.y - b.y)
    }

    /// Euclidean distance `sqrt((ax−bx)² + (ay−by)²)`.
    #[inline]
    pub fn distance(a: Point, b: Point) -> f64 {
        (a.to_vec2() - b.to_vec2()).norm()
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        Point::add(self, rhs)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Point::subtract(self, rhs)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}
