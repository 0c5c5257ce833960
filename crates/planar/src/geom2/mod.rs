//! Exact 2D geometry for crossing-number containment.
//!
//! Purpose
//! - Answer point-in-polygon queries with a horizontal test line and an
//!   explicit rule for test lines that pass through a shared vertex.
//! - Keep every predicate exact: no epsilons, equality is bitwise `f64` `==`.
//!
//! Layering
//! - `Polygon` → `Segment` → `Line` → `Point`; no back references.
//!
//! Code cross-refs: `Point`, `Line`, `Segment`, `Polygon`, `rand::draw_polygon_radial`

mod line;
mod point;
mod polygon;
pub mod rand;
mod segment;

pub use line::{Line, Orientation};
pub use point::Point;
pub use polygon::Polygon;
pub use segment::{Interval, Segment};
