use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use planar::Polygon;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::{evaluate, parse_point, parse_ring, read_query_doc, write_json, QueryDoc};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-in-polygon queries against the planar kernel")]
struct Cmd {
    /// Optional run label; propagated to logs and provenance
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate every point of a JSON query document and write results JSON
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Test a single point against an inline ring, e.g. --polygon "0,0;4,0;4,4" --at "1,1"
    Point {
        #[arg(long)]
        polygon: String,
        #[arg(long)]
        at: String,
    },
    /// Write a reproducible random star-shaped polygon as a query document
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Contains { input, out } => contains(&input, &out, cmd.tag),
        Action::Point { polygon, at } => point(&polygon, &at),
        Action::Sample {
            seed,
            index,
            vertices,
            out,
        } => sample(seed, index, vertices, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn contains(input: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    let doc = read_query_doc(input)?;
    tracing::info!(
        input = %input.display(),
        vertices = doc.polygon.len(),
        points = doc.points.len(),
        tag = ?tag,
        "contains"
    );
    let results = evaluate(&doc);
    let inside = results.results.iter().filter(|v| v.inside).count();
    write_json(out, &results)?;
    let payload = Payload::new(serde_json::json!({
        "input": input.to_string_lossy(),
        "vertices": doc.polygon.len(),
        "points": doc.points.len(),
        "inside": inside,
    }))
    .with_tag(tag);
    let prov = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), inside, "wrote results");
    Ok(())
}

fn point(polygon: &str, at: &str) -> Result<()> {
    let poly = Polygon::new(parse_ring(polygon)?);
    let q = parse_point(at)?;
    let inside = poly.contains(q);
    tracing::info!(x = q.x, y = q.y, sides = poly.sides().len(), inside, "point");
    println!("{inside}");
    Ok(())
}

fn sample(seed: u64, index: u64, vertices: usize, out: &Path, tag: Option<String>) -> Result<()> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let poly = draw_polygon_radial(cfg, ReplayToken { seed, index });
    tracing::info!(seed, index, vertices = poly.len(), "sample");
    write_json(out, &QueryDoc::from_polygon(&poly))?;
    let payload = Payload::new(serde_json::json!({
        "seed": seed,
        "index": index,
        "vertices": poly.len(),
    }))
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let mut obj = provenance::header(tag.as_deref());
    obj["params"] = serde_json::json!({});
    obj["outputs"] = serde_json::json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ResultsDoc;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sample_then_contains_round_trip() {
        let dir = tempdir().unwrap();
        let poly_path = dir.path().join("poly.json");
        sample(7, 1, 9, &poly_path, None).unwrap();
        assert!(dir.path().join("poly.provenance.json").exists());

        let mut doc = read_query_doc(&poly_path).unwrap();
        assert_eq!(doc.polygon.len(), 9);
        doc.points = vec![[0.0, 0.0], [10.0, 10.0]];
        let query_path = dir.path().join("query.json");
        write_json(&query_path, &doc).unwrap();

        let out = dir.path().join("out/results.json");
        contains(&query_path, &out, Some("test".into())).unwrap();
        let parsed: ResultsDoc = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let inside: Vec<bool> = parsed.results.iter().map(|v| v.inside).collect();
        assert_eq!(inside, vec![true, false]);
        assert!(dir.path().join("out/results.provenance.json").exists());
    }

    #[test]
    fn point_rejects_malformed_input() {
        assert!(point("0,0;4,0;4,4", "1,1").is_ok());
        assert!(point("0,0;4,0;4", "1,1").is_err());
        assert!(point("0,0;4,0;4,4", "oops").is_err());
    }
}
