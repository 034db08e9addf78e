//! Feasibility classifier: degree balance plus bidirectional connectivity.

use super::build::{first_with_out_edges, reverse_adjacency};
use super::types::{AdjacencyList, DegreeTable, EulerKind, GraphClassification};

/// Classify a graph given its degree table and adjacency list.
///
/// Circuit is decided before trail, so a trail classification always carries
/// exactly one start and one end candidate. A graph without edges is `None`.
pub fn classify(degrees: &DegreeTable, adj: &AdjacencyList) -> GraphClassification {
    let mut start_candidates = 0usize;
    let mut end_candidates = 0usize;
    let mut surplus_vertex: Option<usize> = None;
    let mut within_one = true;
    // Full scan; an out-of-range surplus does not stop the counting.
    for v in 0..degrees.len() {
        match degrees.surplus(v) {
            0 => {}
            1 => {
                start_candidates += 1;
                surplus_vertex.get_or_insert(v);
            }
            -1 => end_candidates += 1,
            _ => within_one = false,
        }
    }
    let degree_balanced = within_one && start_candidates <= 1 && end_candidates <= 1;
    let connected = is_euler_connected(adj);

    let mut out = GraphClassification {
        degree_balanced,
        connected,
        start_candidates,
        end_candidates,
        start_vertex: 0,
        kind: EulerKind::None,
    };
    if out.has_circuit() {
        // An edgeless graph is balanced and connected but has nothing to walk.
        if let Some(v) = first_with_out_edges(adj) {
            out.kind = EulerKind::Circuit;
            out.start_vertex = v;
        }
    } else if out.has_trail() {
        out.kind = EulerKind::Trail;
        out.start_vertex = match surplus_vertex {
            Some(v) if start_candidates == 1 => v,
            _ => first_with_out_edges(adj).unwrap_or(0),
        };
    }
    tracing::debug!(
        degree_balanced,
        connected,
        start_candidates,
        end_candidates,
        kind = %out.kind,
        start = out.start_vertex,
        "classified graph"
    );
    out
}

/// True iff every vertex touching an edge reaches, and is reached from, the
/// lowest-id such vertex. A graph without edges is trivially connected.
pub fn is_euler_connected(adj: &AdjacencyList) -> bool {
    let n = adj.len();
    let mut active = vec![false; n];
    for (u, outs) in adj.iter().enumerate() {
        for &v in outs {
            active[u] = true;
            active[v] = true;
        }
    }
    let Some(seed) = active.iter().position(|&a| a) else {
        return true;
    };
    let covers_active = |visited: &[bool]| {
        active
            .iter()
            .zip(visited)
            .all(|(&is_active, &seen)| !is_active || seen)
    };
    if !covers_active(&reachable_from(adj, seed)) {
        return false;
    }
    let rev = reverse_adjacency(adj);
    covers_active(&reachable_from(&rev, seed))
}

/// Vertices reachable from `seed`, via an explicit heap stack.
pub(crate) fn reachable_from(g: &AdjacencyList, seed: usize) -> Vec<bool> {
    let mut visited = vec![false; g.len()];
    let mut stack = vec![seed];
    while let Some(cur) = stack.pop() {
        if visited[cur] {
            continue;
        }
        visited[cur] = true;
        stack.extend(g[cur].iter().copied().filter(|&v| !visited[v]));
    }
    visited
}
