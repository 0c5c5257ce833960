//! Planar point-in-polygon kernel.
//!
//! Lines, bounded segments and polygons over exact `f64` coordinates, used to
//! answer "is this point on or inside this ring?" for spatial property values.
//!
//! API Policy
//! - Every type is immutable after construction; all operations are total.
//! - Absence (no intersection, coordinate out of range) is `None`, never an error.
//! - No I/O lives here; callers own parsing and reporting.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Interval, Line, Orientation, Point, Polygon, Segment};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{Interval, Line, Orientation, Point, Polygon, Segment};
    pub use nalgebra::Vector2 as Vec2;
}
