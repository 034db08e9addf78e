//! Data types shared by the builder, classifier and constructor.
//!
//! Kept small and explicit so `build`, `classify` and `hierholzer` read top to bottom.

use std::fmt;

/// Directed edge `(from, to)`; duplicates and self-loops are allowed.
pub type Edge = (usize, usize);

/// Outgoing destinations per vertex, in edge-insertion order.
///
/// The constructor consumes entries from the back, so callers must treat a list
/// handed to [`super::hierholzer`] as gone.
pub type AdjacencyList = Vec<Vec<usize>>;

/// Per-vertex in/out degrees, computed once by the builder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeTable {
    pub in_degree: Vec<usize>,
    pub out_degree: Vec<usize>,
}

impl DegreeTable {
    pub fn with_vertices(n: usize) -> Self {
        Self {
            in_degree: vec![0; n],
            out_degree: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.out_degree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out_degree.is_empty()
    }

    /// `out_degree[v] - in_degree[v]` as a signed value.
    #[inline]
    pub fn surplus(&self, v: usize) -> isize {
        self.out_degree[v] as isize - self.in_degree[v] as isize
    }
}

/// Which Eulerian structure a graph admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EulerKind {
    None,
    Circuit,
    Trail,
}

impl EulerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EulerKind::None => "none",
            EulerKind::Circuit => "circuit",
            EulerKind::Trail => "trail",
        }
    }
}

impl fmt::Display for EulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the feasibility classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphClassification {
    /// No vertex off by more than one, at most one start and one end candidate.
    pub degree_balanced: bool,
    /// Every active vertex reaches and is reached from the seed.
    pub connected: bool,
    /// Vertices with `out - in == 1`.
    pub start_candidates: usize,
    /// Vertices with `in - out == 1`.
    pub end_candidates: usize,
    /// Where the constructor begins; meaningful only when `kind != None`.
    pub start_vertex: usize,
    pub kind: EulerKind,
}

impl GraphClassification {
    /// Balanced and trivially connected, with nothing to walk.
    pub fn edgeless() -> Self {
        Self {
            degree_balanced: true,
            connected: true,
            start_candidates: 0,
            end_candidates: 0,
            start_vertex: 0,
            kind: EulerKind::None,
        }
    }

    pub fn has_circuit(&self) -> bool {
        self.connected
            && self.degree_balanced
            && self.start_candidates == 0
            && self.end_candidates == 0
    }

    pub fn has_trail(&self) -> bool {
        self.connected
            && self.degree_balanced
            && self.start_candidates <= 1
            && self.end_candidates <= 1
    }
}

/// Eulerian walk returned by [`super::euler_walk`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EulerWalk {
    pub kind: EulerKind,
    pub vertices: Vec<usize>,
}

impl EulerWalk {
    pub fn is_closed(&self) -> bool {
        self.kind == EulerKind::Circuit
    }
}

/// Contract breaches by the caller. "No Eulerian structure" is not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EulerError {
    VertexOutOfRange {
        edge_index: usize,
        vertex: usize,
        vertex_count: usize,
    },
}

impl fmt::Display for EulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfRange {
                edge_index,
                vertex,
                vertex_count,
            } => write!(
                f,
                "edge {edge_index} references vertex {vertex}, \
                 but the graph has {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for EulerError {}
