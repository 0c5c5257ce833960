//! JSON documents and inline coordinate strings accepted by the CLI.

use anyhow::{bail, Context, Result};
use planar::{Point, Polygon};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Polygon ring plus query points, coordinates as `[x, y]` pairs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDoc {
    pub polygon: Vec<[f64; 2]>,
    #[serde(default)]
    pub points: Vec<[f64; 2]>,
}

impl QueryDoc {
    pub fn from_polygon(poly: &Polygon) -> Self {
        Self {
            polygon: poly.vertices().iter().map(|v| [v.x, v.y]).collect(),
            points: Vec::new(),
        }
    }

    pub fn polygon(&self) -> Polygon {
        self.polygon.iter().copied().map(Point::from).collect()
    }
}

/// Per-point answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub point: [f64; 2],
    pub inside: bool,
    pub crossings: usize,
    pub on_boundary: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsDoc {
    pub results: Vec<Verdict>,
}

pub fn read_query_doc(path: &Path) -> Result<QueryDoc> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Evaluate every query point of `doc` against its polygon, in input order.
pub fn evaluate(doc: &QueryDoc) -> ResultsDoc {
    let poly = doc.polygon();
    let results = doc
        .points
        .iter()
        .map(|&[x, y]| {
            let q = Point::new(x, y);
            Verdict {
                point: [x, y],
                inside: poly.contains(q),
                crossings: poly.crossings(q),
                on_boundary: poly.on_boundary(q),
            }
        })
        .collect();
    ResultsDoc { results }
}

/// Parse `"x,y"`.
pub fn parse_point(s: &str) -> Result<Point> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        bail!("expected `x,y`, got {s:?}");
    }
    let x: f64 = parts[0]
        .parse()
        .with_context(|| format!("bad x coordinate in {s:?}"))?;
    let y: f64 = parts[1]
        .parse()
        .with_context(|| format!("bad y coordinate in {s:?}"))?;
    Ok(Point::new(x, y))
}

/// Parse `"x,y;x,y;..."` into a vertex ring.
pub fn parse_ring(s: &str) -> Result<Vec<Point>> {
    let ring: Vec<Point> = s
        .split(';')
        .filter(|part| !part.trim().is_empty())
        .map(parse_point)
        .collect::<Result<_>>()?;
    if ring.is_empty() {
        bail!("polygon needs at least one vertex");
    }
    Ok(ring)
}
