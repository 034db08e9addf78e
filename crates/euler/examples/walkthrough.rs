//! Classify and walk the four reference graphs and print what comes back.
//!
//! Run with `cargo run -p euler --example walkthrough`.

use euler::prelude::*;

fn main() {
    let cases: [(&str, usize, Vec<Edge>); 4] = [
        ("five-cycle", 5, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]),
        ("chain", 4, vec![(0, 1), (1, 2), (2, 3)]),
        ("detour", 3, vec![(0, 1), (1, 0), (0, 2)]),
        (
            "two components",
            6,
            vec![(0, 1), (1, 0), (2, 3), (3, 4), (4, 2)],
        ),
    ];
    for (name, n, edges) in cases {
        let cls = classify_graph(n, &edges).expect("edges are in range");
        match euler_walk(n, &edges).expect("edges are in range") {
            Some(walk) => println!("{name:>15}: {} {:?}", walk.kind, walk.vertices),
            None => println!(
                "{name:>15}: no Euler cycle or path (balanced={}, connected={})",
                cls.degree_balanced, cls.connected
            ),
        }
    }
}
