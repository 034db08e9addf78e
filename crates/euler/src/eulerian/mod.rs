//! Eulerian circuits and trails in directed multigraphs.
//!
//! Purpose
//! - Decide whether `(n, edges)` admits an Eulerian circuit or trail and, if so,
//!   return the vertex sequence realizing it.
//!
//! Pipeline
//! - `build`: edge list → adjacency (insertion order) + degree table.
//! - `classify`: degree surplus scan + forward/reverse reachability from the
//!   lowest active vertex → circuit, trail, or nothing, and a start vertex.
//! - `hierholzer`: consumes an owned copy of the adjacency from the start vertex.
//!
//! Every traversal uses a heap `Vec` as its stack; graphs with hundreds of
//! thousands of vertices in a single chain must not overflow the call stack.
//! All "pick any vertex" choices take the lowest qualifying id so output is
//! reproducible.

mod build;
mod classify;
mod hierholzer;
mod types;

pub use build::build_adjacency;
pub use classify::{classify, is_euler_connected};
pub use hierholzer::hierholzer;
pub use types::{
    AdjacencyList, DegreeTable, Edge, EulerError, EulerKind, EulerWalk, GraphClassification,
};

/// Eulerian circuit or trail of `(vertex_count, edges)`, or an empty vector.
///
/// A non-empty result always has `edges.len() + 1` vertices. Out-of-range
/// endpoints are rejected with [`EulerError::VertexOutOfRange`].
pub fn compute_euler_trail(
    vertex_count: usize,
    edges: &[Edge],
) -> Result<Vec<usize>, EulerError> {
    Ok(euler_walk(vertex_count, edges)?
        .map(|walk| walk.vertices)
        .unwrap_or_default())
}

/// Like [`compute_euler_trail`] but also reports whether the walk is closed.
pub fn euler_walk(vertex_count: usize, edges: &[Edge]) -> Result<Option<EulerWalk>, EulerError> {
    if vertex_count == 0 || edges.is_empty() {
        return Ok(None);
    }
    let (adj, degrees) = build_adjacency(vertex_count, edges)?;
    let cls = classify(&degrees, &adj);
    if cls.kind == EulerKind::None {
        return Ok(None);
    }
    let vertices = hierholzer(adj, cls.start_vertex);
    tracing::debug!(
        kind = %cls.kind,
        start = cls.start_vertex,
        len = vertices.len(),
        "constructed walk"
    );
    debug_assert_eq!(vertices.len(), edges.len() + 1);
    Ok(Some(EulerWalk {
        kind: cls.kind,
        vertices,
    }))
}

/// Builder and classifier only; no walk is constructed.
///
/// Degenerate inputs follow [`euler_walk`]: `vertex_count == 0` or no edges
/// yield the edgeless classification without validating endpoints.
pub fn classify_graph(
    vertex_count: usize,
    edges: &[Edge],
) -> Result<GraphClassification, EulerError> {
    if vertex_count == 0 || edges.is_empty() {
        return Ok(GraphClassification::edgeless());
    }
    let (adj, degrees) = build_adjacency(vertex_count, edges)?;
    Ok(classify(&degrees, &adj))
}
