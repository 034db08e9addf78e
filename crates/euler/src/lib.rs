//! Eulerian circuits and trails in directed multigraphs.
//!
//! Layout
//! - `eulerian`: the pipeline (degree/adjacency builder, feasibility
//!   classifier, Hierholzer constructor) and its entry point
//!   [`compute_euler_trail`].
//! - `generate`: reproducible synthetic graphs for benchmarks.
//! - `text`: the `n m` + edge pairs text format read by the CLI.
//!
//! API Policy
//! - The crate is consumed by the CLI, the benches and the Python binding in this
//!   workspace. There is no stability promise beyond `compute_euler_trail`.

pub mod api;
pub mod eulerian;
pub mod generate;
pub mod text;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use eulerian::{compute_euler_trail, euler_walk, Edge, EulerError, EulerKind, EulerWalk};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::eulerian::{
        classify_graph, compute_euler_trail, euler_walk, Edge, EulerError, EulerKind, EulerWalk,
        GraphClassification,
    };
    pub use crate::generate::{GraphFamily, DENSE_SEED, RANDOM_SEED};
    pub use crate::text::{format_edge_list, parse_edge_list, GraphInput};
}
