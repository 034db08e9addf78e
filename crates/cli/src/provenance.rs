//! `<csv stem>.provenance.json`: which build ran which ladder.

use crate::bench::{BenchCfg, BenchRow};
use anyhow::{Context, Result};
use euler::api::{DENSE_SEED, RANDOM_SEED};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Size ladder and generator seeds; enough to regenerate every benchmarked graph.
#[derive(Debug, Serialize)]
pub struct Ladder {
    pub sizes: Vec<usize>,
    pub complete_sizes: Vec<usize>,
    pub dense_extra_factor: usize,
    pub random_edge_factor: usize,
    pub dense_seed: u64,
    pub random_seed: u64,
}

impl From<&BenchCfg> for Ladder {
    fn from(cfg: &BenchCfg) -> Self {
        Self {
            sizes: cfg.sizes.clone(),
            complete_sizes: cfg.complete_sizes.clone(),
            dense_extra_factor: cfg.dense_extra_factor,
            random_edge_factor: cfg.random_edge_factor,
            dense_seed: DENSE_SEED,
            random_seed: RANDOM_SEED,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BenchProvenance {
    pub code_rev: String,
    pub euler_version: &'static str,
    pub ladder: Ladder,
    /// First-seen order, matching the CSV.
    pub graph_types: Vec<String>,
    pub rows: usize,
    pub total_edges: usize,
    pub csv: PathBuf,
}

impl BenchProvenance {
    pub fn new(cfg: &BenchCfg, rows: &[BenchRow], csv: &Path) -> Self {
        let mut graph_types: Vec<String> = Vec::new();
        for row in rows {
            if !graph_types.contains(&row.graph_type) {
                graph_types.push(row.graph_type.clone());
            }
        }
        Self {
            code_rev: code_rev(),
            euler_version: euler::VERSION,
            ladder: Ladder::from(cfg),
            graph_types,
            rows: rows.len(),
            total_edges: rows.iter().map(|r| r.edges).sum(),
            csv: csv.to_path_buf(),
        }
    }

    /// Write the record beside its CSV and return the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(&self.csv);
        crate::create_parent(&path)?;
        std::fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// Printed by `euler-cli report`: the build plus the ladder `bench` runs by default.
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub code_rev: String,
    pub euler_version: &'static str,
    pub default_ladder: Ladder,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            code_rev: code_rev(),
            euler_version: euler::VERSION,
            default_ladder: Ladder::from(&BenchCfg::default()),
        }
    }
}

pub fn sidecar_path(csv: &Path) -> PathBuf {
    csv.with_extension("provenance.json")
}

/// `GIT_COMMIT` if set, else the short hash of `HEAD`, else `"unknown"`.
fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git")
                .args(["rev-parse", "--short", "HEAD"])
                .output()
                .ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
