//! Classify a handful of query points against a concave ring and a random
//! star-shaped polygon.
//!
//! Usage:
//!   cargo run -p planar --example point_in_polygon
//!   cargo run -p planar --example point_in_polygon -- 17   # sampler seed

use planar::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);

    let ring = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(6.0, 0.0),
        Point::new(6.0, 6.0),
        Point::new(4.0, 6.0),
        Point::new(4.0, 2.0),
        Point::new(2.0, 2.0),
        Point::new(2.0, 6.0),
        Point::new(0.0, 6.0),
    ]);
    println!("U-shaped ring, {} sides", ring.sides().len());
    for q in [
        Point::new(1.0, 4.0),
        Point::new(3.0, 4.0),
        Point::new(3.0, 2.0),
        Point::new(6.0, 6.0),
        Point::new(7.0, 1.0),
    ] {
        println!(
            "  ({:>4.1}, {:>4.1})  inside={:<5}  boundary={:<5}  crossings={}",
            q.x,
            q.y,
            ring.contains(q),
            ring.on_boundary(q),
            ring.crossings(q)
        );
    }

    let star = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed, index: 0 });
    println!("random star (seed {seed}), {} vertices", star.len());
    for k in 0..5 {
        let q = Point::new(-1.5 + 0.75 * k as f64, 0.25);
        println!("  ({:>5.2}, {:>5.2})  inside={}", q.x, q.y, star.contains(q));
    }
}
