//! Curated surface for the CLI and the Python binding (UNSTABLE).
//!
//! Breaking changes are allowed; keep callers in this workspace in sync.

// Pipeline
pub use crate::eulerian::{
    build_adjacency, classify, classify_graph, compute_euler_trail, euler_walk, hierholzer,
    is_euler_connected, AdjacencyList, DegreeTable, Edge, EulerError, EulerKind, EulerWalk,
    GraphClassification,
};
// Synthetic graphs
pub use crate::generate::{
    complete_graph, dense_euler_cycle, euler_cycle, euler_path, random_graph, GeneratorError,
    GraphFamily, DENSE_SEED, MAX_EDGES, RANDOM_SEED,
};
// Text format
pub use crate::text::{format_edge_list, parse_edge_list, GraphInput, ParseError};
