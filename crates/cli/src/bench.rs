//! Wall-clock benchmark ladder over the synthetic graph families.
//!
//! Each run times one `compute_euler_trail` call; graph generation stays
//! outside the timed region. Rows go to stdout as an aligned table and to a CSV
//! with columns `test_name,graph_type,vertices,edges,time_ms`.

use anyhow::{Context, Result};
use euler::api::{compute_euler_trail, Edge, GraphFamily, DENSE_SEED, RANDOM_SEED};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

/// Benchmark ladder configuration.
#[derive(Clone, Debug)]
pub struct BenchCfg {
    pub sizes: Vec<usize>,
    /// Complete graphs grow quadratically; kept on a separate, shorter ladder.
    pub complete_sizes: Vec<usize>,
    /// Dense cycles get `n * dense_extra_factor` extra edges.
    pub dense_extra_factor: usize,
    /// Random graphs get `n * random_edge_factor` edges.
    pub random_edge_factor: usize,
}

impl Default for BenchCfg {
    fn default() -> Self {
        Self {
            sizes: vec![100, 500, 1000, 2000, 5000, 10000, 20000, 50000, 100000],
            complete_sizes: vec![100, 500, 1000, 2000, 5000],
            dense_extra_factor: 4,
            random_edge_factor: 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BenchRow {
    pub test_name: String,
    pub graph_type: String,
    pub vertices: usize,
    pub edges: usize,
    pub time_ms: f64,
}

/// Run every family over its size ladder, printing one section per family.
pub fn run_ladder(cfg: &BenchCfg) -> Result<Vec<BenchRow>> {
    let mut rows = Vec::new();
    let sections: [(&str, fn(usize, &BenchCfg) -> (GraphFamily, u64)); 4] = [
        ("Simple Euler Cycles", |_, _| (GraphFamily::Cycle, 0)),
        ("Simple Euler Paths", |_, _| (GraphFamily::Path, 0)),
        ("Dense Euler Cycles", |n, cfg| {
            (
                GraphFamily::DenseCycle {
                    extra_edges: n.saturating_mul(cfg.dense_extra_factor),
                },
                DENSE_SEED,
            )
        }),
        ("Random Graphs", |n, cfg| {
            (
                GraphFamily::Random {
                    edges: n.saturating_mul(cfg.random_edge_factor),
                },
                RANDOM_SEED,
            )
        }),
    ];
    for (idx, (title, family_for)) in sections.iter().enumerate() {
        println!("\n[{}] {title}:", idx + 1);
        for &n in &cfg.sizes {
            let (family, seed) = family_for(n, cfg);
            rows.push(run_one(family, n, seed)?);
        }
    }
    println!("\n[{}] Complete Graphs:", sections.len() + 1);
    for &n in &cfg.complete_sizes {
        rows.push(run_one(GraphFamily::Complete, n, 0)?);
    }
    Ok(rows)
}

fn run_one(family: GraphFamily, n: usize, seed: u64) -> Result<BenchRow> {
    let edges = family
        .generate(n, seed)
        .with_context(|| format!("generating {} with n={n}", family.graph_type()))?;
    let row = measure(family.label(), family.graph_type(), n, &edges)?;
    println!(
        "{:<30} | n={:<6} | edges={:<8} | time={:>10.3} ms",
        row.test_name, row.vertices, row.edges, row.time_ms
    );
    Ok(row)
}

/// Time a single solver call.
pub fn measure(test_name: &str, graph_type: &str, n: usize, edges: &[Edge]) -> Result<BenchRow> {
    let start = Instant::now();
    let walk = compute_euler_trail(n, edges)?;
    let time_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::debug!(
        graph_type,
        n,
        edges = edges.len(),
        walk_len = walk.len(),
        time_ms,
        "bench_run"
    );
    Ok(BenchRow {
        test_name: test_name.to_string(),
        graph_type: graph_type.to_string(),
        vertices: n,
        edges: edges.len(),
        time_ms,
    })
}

pub fn rows_to_frame(rows: &[BenchRow]) -> PolarsResult<DataFrame> {
    df!(
        "test_name" => rows.iter().map(|r| r.test_name.clone()).collect::<Vec<_>>(),
        "graph_type" => rows.iter().map(|r| r.graph_type.clone()).collect::<Vec<_>>(),
        "vertices" => rows.iter().map(|r| r.vertices as u64).collect::<Vec<_>>(),
        "edges" => rows.iter().map(|r| r.edges as u64).collect::<Vec<_>>(),
        "time_ms" => rows.iter().map(|r| r.time_ms).collect::<Vec<_>>()
    )
}

/// Mean and max time per graph type, in first-seen order.
pub fn summarize(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .group_by_stable([col("graph_type")])
        .agg([
            col("time_ms").mean().alias("mean_ms"),
            col("time_ms").max().alias("max_ms"),
            col("edges").max().alias("max_edges"),
        ])
        .collect()
}

pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    crate::create_parent(path)?;
    let mut file =
        File::create(path).with_context(|| format!("opening {} for writing", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_float_precision(Some(6))
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tiny_cfg() -> BenchCfg {
        BenchCfg {
            sizes: vec![10, 20],
            complete_sizes: vec![5],
            ..BenchCfg::default()
        }
    }

    #[test]
    fn ladder_covers_every_family() {
        let rows = run_ladder(&tiny_cfg()).unwrap();
        assert_eq!(rows.len(), 4 * 2 + 1);
        let dense = rows
            .iter()
            .find(|r| r.graph_type == "dense_euler_cycle" && r.vertices == 10)
            .unwrap();
        assert_eq!(dense.edges, 10 + 40);
        let complete = rows.last().unwrap();
        assert_eq!(complete.graph_type, "complete");
        assert_eq!(complete.edges, 20);
        assert!(rows.iter().all(|r| r.time_ms >= 0.0));
    }

    #[test]
    fn csv_has_expected_header_and_rows() {
        let rows = run_ladder(&tiny_cfg()).unwrap();
        let mut df = rows_to_frame(&rows).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("bench.csv");
        write_csv(&mut df, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("test_name,graph_type,vertices,edges,time_ms")
        );
        assert_eq!(lines.count(), rows.len());
    }

    #[test]
    fn summary_has_one_row_per_graph_type() {
        let rows = run_ladder(&tiny_cfg()).unwrap();
        let df = rows_to_frame(&rows).unwrap();
        let summary = summarize(&df).unwrap();
        assert_eq!(summary.height(), 5);
        assert_eq!(summary.width(), 4);
    }

    #[test]
    fn measure_rejects_out_of_range_edges() {
        assert!(measure("bad", "custom", 2, &[(0, 2)]).is_err());
    }
}
