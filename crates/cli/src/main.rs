use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use euler::api::{euler_walk, format_edge_list, parse_edge_list, EulerKind, GraphFamily};
use euler::generate::{DENSE_SEED, RANDOM_SEED};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod bench;
mod provenance;

#[derive(Parser)]
#[command(name = "euler-cli")]
#[command(about = "Eulerian circuit/trail solver and benchmark driver")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read `n m` + edge pairs and print the Eulerian circuit/trail, if any
    Solve {
        /// Input file; `-` reads stdin
        #[arg(long, default_value = "-")]
        input: String,
        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Emit a synthetic graph in the solver's text format
    Generate {
        #[arg(long, value_enum)]
        family: FamilyArg,
        #[arg(long)]
        vertices: usize,
        /// Extra edges (dense) or edge count (random); defaults to 4n / 2n
        #[arg(long)]
        edges: Option<usize>,
        /// Defaults to the benchmark seed of the family
        #[arg(long)]
        seed: Option<u64>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Time the solver over the synthetic ladder and write a CSV + provenance sidecar
    Bench {
        #[arg(long, default_value = "results/benchmark_results.csv")]
        out: PathBuf,
        /// Comma-separated vertex counts for the non-complete families
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<usize>,
        /// Comma-separated vertex counts for complete graphs
        #[arg(long, value_delimiter = ',')]
        complete_sizes: Vec<usize>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FamilyArg {
    Cycle,
    Path,
    Dense,
    Random,
    Complete,
}

impl FamilyArg {
    fn resolve(self, n: usize, edges: Option<usize>, seed: Option<u64>) -> (GraphFamily, u64) {
        match self {
            FamilyArg::Cycle => (GraphFamily::Cycle, seed.unwrap_or(0)),
            FamilyArg::Path => (GraphFamily::Path, seed.unwrap_or(0)),
            FamilyArg::Dense => (
                GraphFamily::DenseCycle {
                    extra_edges: edges.unwrap_or(n.saturating_mul(4)),
                },
                seed.unwrap_or(DENSE_SEED),
            ),
            FamilyArg::Random => (
                GraphFamily::Random {
                    edges: edges.unwrap_or(n.saturating_mul(2)),
                },
                seed.unwrap_or(RANDOM_SEED),
            ),
            FamilyArg::Complete => (GraphFamily::Complete, seed.unwrap_or(0)),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, json } => solve(input, json),
        Action::Generate {
            family,
            vertices,
            edges,
            seed,
            out,
        } => generate(family, vertices, edges, seed, out),
        Action::Bench {
            out,
            sizes,
            complete_sizes,
        } => run_bench(out, sizes, complete_sizes),
        Action::Report => report(),
    }
}

#[derive(Debug, Serialize)]
struct SolveReport {
    vertices: usize,
    edges: usize,
    kind: &'static str,
    walk: Vec<usize>,
    time_ms: f64,
}

fn solve_text(text: &str) -> Result<SolveReport> {
    let graph = parse_edge_list(text).context("parsing edge list")?;
    let start = Instant::now();
    let walk = euler_walk(graph.vertex_count, &graph.edges).context("solving graph")?;
    let time_ms = start.elapsed().as_secs_f64() * 1e3;
    let (kind, walk) = match walk {
        Some(w) => (w.kind, w.vertices),
        None => (EulerKind::None, Vec::new()),
    };
    Ok(SolveReport {
        vertices: graph.vertex_count,
        edges: graph.edges.len(),
        kind: kind.as_str(),
        walk,
        time_ms,
    })
}

fn solve(input: String, json: bool) -> Result<()> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(&input).with_context(|| format!("reading {input}"))?
    };
    let report = solve_text(&text)?;
    tracing::info!(
        input,
        vertices = report.vertices,
        edges = report.edges,
        kind = report.kind,
        time_ms = report.time_ms,
        "solve"
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.walk.is_empty() {
        println!("No Euler cycle or path found");
    } else {
        let seq: Vec<String> = report.walk.iter().map(|v| v.to_string()).collect();
        println!("Euler {}: {}", report.kind, seq.join(" "));
    }
    Ok(())
}

fn generate(
    family: FamilyArg,
    vertices: usize,
    edges: Option<usize>,
    seed: Option<u64>,
    out: Option<PathBuf>,
) -> Result<()> {
    let (family, seed) = family.resolve(vertices, edges, seed);
    let edge_list = family
        .generate(vertices, seed)
        .with_context(|| format!("generating {}", family.graph_type()))?;
    tracing::info!(
        graph_type = family.graph_type(),
        vertices,
        edges = edge_list.len(),
        seed,
        "generate"
    );
    let text = format_edge_list(vertices, &edge_list);
    match out {
        Some(path) => {
            create_parent(&path)?;
            std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run_bench(out: PathBuf, sizes: Vec<usize>, complete_sizes: Vec<usize>) -> Result<()> {
    let mut cfg = bench::BenchCfg::default();
    if !sizes.is_empty() {
        cfg.sizes = sizes;
    }
    if !complete_sizes.is_empty() {
        cfg.complete_sizes = complete_sizes;
    }
    tracing::info!(sizes = ?cfg.sizes, complete_sizes = ?cfg.complete_sizes, "bench");
    println!("=== Euler Graph Benchmark ===");
    println!("{}", "-".repeat(80));
    let rows = bench::run_ladder(&cfg)?;
    println!("{}", "-".repeat(80));

    let mut df = bench::rows_to_frame(&rows)?;
    bench::write_csv(&mut df, &out)?;
    let summary = bench::summarize(&df)?;
    println!("{summary}");
    tracing::info!(rows = rows.len(), out = %out.display(), "bench_written");

    let prov = provenance::BenchProvenance::new(&cfg, &rows, &out).write()?;
    println!("\nResults written to: {}", out.display());
    tracing::info!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

fn report() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::BuildInfo::current())?
    );
    Ok(())
}

/// Shared by every subcommand that writes a file.
fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_text_reports_circuit() {
        let report = solve_text("5 5\n0 1\n1 2\n2 3\n3 4\n4 0\n").unwrap();
        assert_eq!(report.kind, "circuit");
        assert_eq!(report.walk, vec![0, 1, 2, 3, 4, 0]);
        assert_eq!(report.edges, 5);
    }

    #[test]
    fn solve_text_reports_absence_without_error() {
        let report = solve_text("6 5 0 1 1 0 2 3 3 4 4 2").unwrap();
        assert_eq!(report.kind, "none");
        assert!(report.walk.is_empty());
    }

    #[test]
    fn solve_text_rejects_bad_input() {
        let err = solve_text("3 1 0 3").unwrap_err();
        assert!(format!("{err:#}").contains("vertex 3"));
        assert!(solve_text("3 2 0 1").is_err());
    }

    #[test]
    fn generated_text_solves() {
        let (family, seed) = FamilyArg::Dense.resolve(20, None, None);
        let edges = family.generate(20, seed).unwrap();
        let report = solve_text(&format_edge_list(20, &edges)).unwrap();
        assert_eq!(report.kind, "circuit");
        assert_eq!(report.walk.len(), 20 + 80 + 1);
    }

    #[test]
    fn create_parent_handles_nested_and_bare_paths() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("graph.txt");
        create_parent(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());
        create_parent(Path::new("graph.txt")).unwrap();
    }

    #[test]
    fn cli_parses_bench_sizes() {
        let cmd = Cmd::try_parse_from(["euler-cli", "bench", "--sizes", "10,20"]).unwrap();
        match cmd.action {
            Action::Bench { sizes, .. } => assert_eq!(sizes, vec![10, 20]),
            _ => panic!("expected bench"),
        }
    }

    #[test]
    fn cli_parses_generate_flags() {
        let cmd = Cmd::try_parse_from([
            "euler-cli", "generate", "--family", "random", "--vertices", "8", "--edges", "5",
        ])
        .unwrap();
        match cmd.action {
            Action::Generate {
                vertices, edges, ..
            } => assert_eq!((vertices, edges), (8, Some(5))),
            _ => panic!("expected generate"),
        }
        assert!(Cmd::try_parse_from(["euler-cli", "generate", "--family", "cycle", "--n", "8"])
            .is_err());
    }
}
