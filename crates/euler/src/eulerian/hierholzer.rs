//! Hierholzer walk over a consumable adjacency list.

use super::types::AdjacencyList;

/// Emit the Eulerian walk starting at `start`, consuming `adj`.
///
/// Precondition: the graph is known to admit a circuit, or a trail starting at
/// `start`. Nothing is checked here; on other inputs the walk comes back short.
pub fn hierholzer(mut adj: AdjacencyList, start: usize) -> Vec<usize> {
    let edge_count: usize = adj.iter().map(Vec::len).sum();
    let mut path = Vec::with_capacity(edge_count + 1);
    let mut walk = Vec::with_capacity(edge_count + 1);
    path.push(start);
    let mut cur = start;
    while !path.is_empty() {
        if let Some(next) = adj[cur].pop() {
            path.push(cur);
            cur = next;
        } else {
            walk.push(cur);
            // Loop condition guarantees the stack is non-empty here.
            if let Some(top) = path.pop() {
                cur = top;
            }
        }
    }
    walk.reverse();
    walk
}
