//! Synthetic directed multigraphs for benchmarks and property checks.
//!
//! Purpose
//! - Produce reproducible edge lists for the benchmark ladder: simple cycles,
//!   simple paths, dense balanced cycles, uniform random graphs, complete graphs.
//!
//! Model
//! - Deterministic families ignore the seed; random families draw from a
//!   `StdRng` seeded with `seed`, so `(family, n, seed)` fixes the edge list.
//! - Dense cycles add random edges in opposite pairs `(u, v), (v, u)`, which
//!   keeps every vertex balanced and preserves the Eulerian circuit.
//! - [`GraphFamily::generate`] rejects any request whose edge list could not be
//!   allocated; the free functions assume their sizes were already checked.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::eulerian::Edge;

/// Seed the benchmark driver uses for dense cycles.
pub const DENSE_SEED: u64 = 42;
/// Seed the benchmark driver uses for random graphs.
pub const RANDOM_SEED: u64 = 123;

/// Longest edge list a `Vec<Edge>` can hold (allocations are capped at `isize::MAX` bytes).
pub const MAX_EDGES: usize = isize::MAX as usize / std::mem::size_of::<Edge>();

/// Error type shared by the generators.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Graph families of the benchmark ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphFamily {
    /// `0 → 1 → … → n-1 → 0`.
    Cycle,
    /// `0 → 1 → … → n-1`.
    Path,
    /// Base cycle plus `extra_edges / 2` random opposite pairs.
    DenseCycle { extra_edges: usize },
    /// `edges` uniformly random `(from, to)` pairs; self-loops included.
    Random { edges: usize },
    /// Every ordered pair `i != j`.
    Complete,
}

impl GraphFamily {
    /// Human-readable row label, as printed by the benchmark driver.
    pub fn label(&self) -> &'static str {
        match self {
            GraphFamily::Cycle => "Simple Cycle",
            GraphFamily::Path => "Simple Path",
            GraphFamily::DenseCycle { .. } => "Dense Cycle",
            GraphFamily::Random { .. } => "Random Graph",
            GraphFamily::Complete => "Complete Graph",
        }
    }

    /// Stable key used in CSV output.
    pub fn graph_type(&self) -> &'static str {
        match self {
            GraphFamily::Cycle => "euler_cycle",
            GraphFamily::Path => "euler_path",
            GraphFamily::DenseCycle { .. } => "dense_euler_cycle",
            GraphFamily::Random { .. } => "random",
            GraphFamily::Complete => "complete",
        }
    }

    /// Exact length of the edge list on `n` vertices; `None` if it overflows `usize`.
    pub fn edge_count(&self, n: usize) -> Option<usize> {
        match *self {
            GraphFamily::Cycle => Some(n),
            GraphFamily::Path => Some(n.saturating_sub(1)),
            GraphFamily::DenseCycle { .. } | GraphFamily::Random { .. } if n == 0 => Some(0),
            GraphFamily::DenseCycle { extra_edges } => n.checked_add(extra_edges / 2 * 2),
            GraphFamily::Random { edges } => Some(edges),
            GraphFamily::Complete => n.checked_mul(n.saturating_sub(1)),
        }
    }

    /// Generate the edge list on `n` vertices.
    pub fn generate(&self, n: usize, seed: u64) -> Result<Vec<Edge>, GeneratorError> {
        let count = self.edge_count(n).ok_or_else(|| {
            GeneratorError::invalid(format!(
                "{} edge count on {n} vertices overflows usize",
                self.graph_type()
            ))
        })?;
        if count > MAX_EDGES {
            return Err(GeneratorError::invalid(format!(
                "{} on {n} vertices needs {count} edges, above the {MAX_EDGES} limit",
                self.graph_type()
            )));
        }
        Ok(match *self {
            GraphFamily::Cycle => euler_cycle(n),
            GraphFamily::Path => euler_path(n),
            GraphFamily::DenseCycle { extra_edges } => dense_euler_cycle(n, extra_edges, seed),
            GraphFamily::Random { edges } => random_graph(n, edges, seed),
            GraphFamily::Complete => complete_graph(n),
        })
    }
}

/// Simple directed cycle over all `n` vertices.
pub fn euler_cycle(n: usize) -> Vec<Edge> {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

/// Simple directed path over all `n` vertices; empty for `n <= 1`.
pub fn euler_path(n: usize) -> Vec<Edge> {
    (1..n).map(|i| (i - 1, i)).collect()
}

/// Cycle plus random balanced pairs; an odd `extra_edges` drops the remainder.
pub fn dense_euler_cycle(n: usize, extra_edges: usize, seed: u64) -> Vec<Edge> {
    if n == 0 {
        return Vec::new();
    }
    let pairs = extra_edges / 2;
    let mut edges = Vec::with_capacity(n + 2 * pairs);
    edges.extend(euler_cycle(n));
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..pairs {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        edges.push((u, v));
        edges.push((v, u));
    }
    edges
}

/// Uniform random multigraph with `num_edges` edges.
pub fn random_graph(n: usize, num_edges: usize, seed: u64) -> Vec<Edge> {
    if n == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_edges)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

/// Complete directed graph without self-loops.
pub fn complete_graph(n: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1));
    for i in 0..n {
        for j in 0..n {
            if i != j {
                edges.push((i, j));
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eulerian::{compute_euler_trail, euler_walk, EulerKind};

    #[test]
    fn deterministic_families_have_expected_shape() {
        assert_eq!(euler_cycle(3), vec![(0, 1), (1, 2), (2, 0)]);
        assert!(euler_cycle(0).is_empty());
        assert_eq!(euler_path(3), vec![(0, 1), (1, 2)]);
        assert!(euler_path(1).is_empty());
        assert_eq!(complete_graph(3).len(), 6);
        assert!(complete_graph(1).is_empty());
    }

    #[test]
    fn random_families_replay_from_seed() {
        let fam = GraphFamily::Random { edges: 50 };
        let a = fam.generate(20, RANDOM_SEED).unwrap();
        let b = fam.generate(20, RANDOM_SEED).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.iter().all(|&(u, v)| u < 20 && v < 20));
        let c = fam.generate(20, RANDOM_SEED + 1).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn dense_cycle_keeps_a_circuit() {
        let edges = dense_euler_cycle(30, 41, DENSE_SEED);
        assert_eq!(edges.len(), 30 + 40);
        let walk = euler_walk(30, &edges).unwrap().unwrap();
        assert_eq!(walk.kind, EulerKind::Circuit);
        assert_eq!(walk.vertices.len(), edges.len() + 1);
    }

    #[test]
    fn families_classify_as_expected() {
        let n = 50;
        let cycle = GraphFamily::Cycle.generate(n, 0).unwrap();
        assert_eq!(euler_walk(n, &cycle).unwrap().unwrap().kind, EulerKind::Circuit);
        let path = GraphFamily::Path.generate(n, 0).unwrap();
        assert_eq!(euler_walk(n, &path).unwrap().unwrap().kind, EulerKind::Trail);
        let complete = GraphFamily::Complete.generate(10, 0).unwrap();
        let walk = compute_euler_trail(10, &complete).unwrap();
        assert_eq!(walk.len(), complete.len() + 1);
        assert_eq!(walk.first(), walk.last());
    }

    #[test]
    fn oversized_complete_graph_is_rejected() {
        let err = GraphFamily::Complete.generate(usize::MAX, 0).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn unallocatable_edge_lists_are_rejected_before_allocating() {
        let dense = GraphFamily::DenseCycle {
            extra_edges: usize::MAX - 10,
        };
        assert!(dense.generate(4, DENSE_SEED).is_err());
        let random = GraphFamily::Random { edges: usize::MAX };
        let err = random.generate(4, RANDOM_SEED).unwrap_err();
        assert!(err.to_string().contains("random"));
        let random = GraphFamily::Random {
            edges: MAX_EDGES + 1,
        };
        assert!(random.generate(4, RANDOM_SEED).is_err());
        assert!(GraphFamily::Cycle.generate(usize::MAX, 0).is_err());
        // Nothing to allocate without vertices.
        assert!(random.generate(0, RANDOM_SEED).unwrap().is_empty());
    }

    #[test]
    fn edge_count_matches_generated_length() {
        let families = [
            GraphFamily::Cycle,
            GraphFamily::Path,
            GraphFamily::DenseCycle { extra_edges: 41 },
            GraphFamily::Random { edges: 37 },
            GraphFamily::Complete,
        ];
        for family in families {
            for n in [0, 1, 7] {
                let edges = family.generate(n, 9).unwrap();
                assert_eq!(family.edge_count(n), Some(edges.len()), "{family:?} n={n}");
            }
        }
    }
}
