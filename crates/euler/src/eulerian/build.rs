//! Degree and adjacency construction from an edge list.

use super::types::{AdjacencyList, DegreeTable, Edge, EulerError};

/// Build the adjacency list and degree table for `n` vertices.
///
/// Endpoints are validated before anything is indexed; the first offending
/// edge (source checked before destination) is reported.
pub fn build_adjacency(
    n: usize,
    edges: &[Edge],
) -> Result<(AdjacencyList, DegreeTable), EulerError> {
    for (edge_index, &(from, to)) in edges.iter().enumerate() {
        for vertex in [from, to] {
            if vertex >= n {
                return Err(EulerError::VertexOutOfRange {
                    edge_index,
                    vertex,
                    vertex_count: n,
                });
            }
        }
    }
    let mut adj: AdjacencyList = vec![Vec::new(); n];
    let mut degrees = DegreeTable::with_vertices(n);
    for &(from, to) in edges {
        adj[from].push(to);
        degrees.out_degree[from] += 1;
        degrees.in_degree[to] += 1;
    }
    Ok((adj, degrees))
}

/// Reverse every edge: `u` lands in the list of `v` for each `(u, v)`.
pub(crate) fn reverse_adjacency(adj: &AdjacencyList) -> AdjacencyList {
    let mut rev: AdjacencyList = vec![Vec::new(); adj.len()];
    for (u, outs) in adj.iter().enumerate() {
        for &v in outs {
            rev[v].push(u);
        }
    }
    rev
}

/// Lowest vertex id with at least one outgoing edge.
pub(crate) fn first_with_out_edges(adj: &AdjacencyList) -> Option<usize> {
    adj.iter().position(|outs| !outs.is_empty())
}
