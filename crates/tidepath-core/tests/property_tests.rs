//! # Property-Based Tests
//!
//! Cross-checks the label-setting engine against brute-force walk
//! enumeration on small graphs, and verifies determinism and the
//! cost-accounting contract on whatever path comes back.

use proptest::collection::vec;
use proptest::prelude::*;
use tidepath_core::{Cost, Graph, TidepathError, VertexId, shortest_path};

// =============================================================================
// BRUTE FORCE REFERENCE
// =============================================================================

/// Minimal walk cost from `start` to `end` by hop-count layering.
///
/// Layer `h` holds the cheapest walk of exactly `h` hops to each vertex;
/// every hop in layer `h` departs at phase `h mod N` by definition of
/// phase. An optimal walk never revisits a `(vertex, phase)` state under
/// non-negative weights, so `V * N` layers cover every candidate.
fn brute_force_cost(graph: &Graph, start: VertexId, end: VertexId) -> Option<Cost> {
    let max_hops = graph.vertex_count() * graph.period();
    let mut dist: Vec<Option<Cost>> = vec![None; graph.vertex_count()];
    dist[start.index()] = Some(0);
    let mut best = dist[end.index()];

    for hop in 0..max_hops {
        let phase = hop % graph.period();
        let mut next: Vec<Option<Cost>> = vec![None; graph.vertex_count()];
        for (v, cost) in dist.iter().enumerate() {
            let Some(cost) = cost else { continue };
            for edge in graph.neighbors(VertexId(v)) {
                let candidate = cost.saturating_add(edge.weights[phase]);
                let slot = &mut next[edge.target.index()];
                if slot.is_none_or(|s| candidate < s) {
                    *slot = Some(candidate);
                }
            }
        }
        dist = next;
        if let Some(cost) = dist[end.index()] {
            if best.is_none_or(|b| cost < b) {
                best = Some(cost);
            }
        }
    }
    best
}

/// Recompute a returned path's cost by replaying its hops.
///
/// Parallel edges mean a vertex pair does not pin down the edge, so the
/// replay takes the cheapest matching edge per hop — a lower bound that
/// the engine's reported cost must not beat.
fn replay_cost(graph: &Graph, vertices: &[VertexId]) -> Option<Cost> {
    let mut cost: Cost = 0;
    for (hop, pair) in vertices.windows(2).enumerate() {
        let phase = hop % graph.period();
        let cheapest = graph
            .neighbors(pair[0])
            .iter()
            .filter(|e| e.target == pair[1])
            .map(|e| e.weights[phase])
            .min()?;
        cost = cost.saturating_add(cheapest);
    }
    Some(cost)
}

// =============================================================================
// GRAPH STRATEGY
// =============================================================================

#[derive(Debug, Clone)]
struct RawGraph {
    vertices: usize,
    period: usize,
    edges: Vec<(usize, usize, Vec<Cost>)>,
}

fn small_graph() -> impl Strategy<Value = RawGraph> {
    (1usize..=6, 1usize..=4).prop_flat_map(|(vertices, period)| {
        let edge = (0..vertices, 0..vertices, vec(0u64..20, period..=period));
        vec(edge, 0..12).prop_map(move |edges| RawGraph {
            vertices,
            period,
            edges,
        })
    })
}

fn build(raw: &RawGraph) -> Graph {
    let mut graph = Graph::new(raw.vertices, raw.period).expect("graph");
    for (src, dst, weights) in &raw.edges {
        graph
            .add_edge(VertexId(*src), VertexId(*dst), weights.clone())
            .expect("edge");
    }
    graph
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The engine's cost matches exhaustive enumeration.
    #[test]
    fn cost_matches_brute_force(raw in small_graph(), start in 0usize..6, end in 0usize..6) {
        let start = VertexId(start % raw.vertices);
        let end = VertexId(end % raw.vertices);
        let graph = build(&raw);

        let expected = brute_force_cost(&graph, start, end);
        match shortest_path(&graph, start, end) {
            Ok(artifact) => prop_assert_eq!(Some(artifact.cost), expected),
            Err(TidepathError::NoPathFound) => prop_assert_eq!(expected, None),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// The returned path's hops re-sum to the reported cost.
    #[test]
    fn returned_path_accounts_for_its_cost(raw in small_graph(), start in 0usize..6, end in 0usize..6) {
        let start = VertexId(start % raw.vertices);
        let end = VertexId(end % raw.vertices);
        let graph = build(&raw);

        if let Ok(artifact) = shortest_path(&graph, start, end) {
            prop_assert_eq!(artifact.vertices.first(), Some(&start));
            prop_assert_eq!(artifact.vertices.last(), Some(&end));
            prop_assert_eq!(artifact.hop_count() % graph.period(), artifact.arrival_phase);

            // Every hop exists; with parallel edges the replay may find a
            // cheaper edge for some hop, never a more expensive path.
            let replayed = replay_cost(&graph, &artifact.vertices);
            prop_assert!(replayed.is_some(), "path contains a non-edge hop");
            if let Some(replayed) = replayed {
                prop_assert!(replayed <= artifact.cost);
                prop_assert!(Some(replayed) >= brute_force_cost(&graph, start, end));
            }
        }
    }

    /// Repeated identical queries return identical costs.
    #[test]
    fn repeated_queries_are_cost_deterministic(raw in small_graph(), start in 0usize..6, end in 0usize..6) {
        let start = VertexId(start % raw.vertices);
        let end = VertexId(end % raw.vertices);
        let graph = build(&raw);

        let first = shortest_path(&graph, start, end);
        for _ in 0..3 {
            let again = shortest_path(&graph, start, end);
            match (&first, &again) {
                (Ok(a), Ok(b)) => {
                    prop_assert_eq!(a.cost, b.cost);
                    prop_assert_eq!(a.arrival_phase, b.arrival_phase);
                }
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                _ => prop_assert!(false, "outcome flipped between identical queries"),
            }
        }
    }

    /// A self-query is always the singleton path at cost zero.
    #[test]
    fn self_query_is_identity(raw in small_graph(), v in 0usize..6) {
        let v = VertexId(v % raw.vertices);
        let graph = build(&raw);

        let artifact = shortest_path(&graph, v, v).expect("self path");
        prop_assert_eq!(artifact.vertices, vec![v]);
        prop_assert_eq!(artifact.cost, 0);
        prop_assert_eq!(artifact.arrival_phase, 0);
    }
}
