//! # Path Reconstructor
//!
//! Walks the predecessor table backward from the selected terminal state
//! to the start state, then reverses the collected vertices into forward
//! `start -> end` order.
//!
//! Termination is guaranteed by the search engine's strict-improvement
//! rule: the predecessor relation forms a forest, so the walk reaches a
//! state with no predecessor. A hop bound of `V * N` guards the walk
//! against a corrupted table all the same.

use crate::search::Labels;
use crate::types::{SearchState, VertexId};

/// Recover the forward vertex sequence ending at `terminal`.
///
/// `terminal` is the `(end, best_phase)` state the search engine selected;
/// when start and end coincide the terminal has no predecessor and the
/// result is the single-element sequence `[start]`.
pub(crate) fn reconstruct(labels: &Labels, terminal: SearchState) -> Vec<VertexId> {
    let mut vertices = Vec::new();
    let mut cursor = Some(terminal);
    let mut budget = labels.state_count();

    while let Some(state) = cursor {
        vertices.push(state.vertex);
        if budget == 0 {
            break;
        }
        budget -= 1;
        cursor = labels.predecessor(state);
    }

    vertices.reverse();
    vertices
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::graph::Graph;
    use crate::search::shortest_path;
    use crate::types::VertexId;

    // Reconstruction is exercised through the public query path; the
    // tables it walks are private to the search engine.

    #[test]
    fn forward_order_matches_edge_direction() {
        let mut graph = Graph::new(4, 2).expect("graph");
        graph
            .add_edge(VertexId(0), VertexId(1), vec![1, 1])
            .expect("edge");
        graph
            .add_edge(VertexId(1), VertexId(2), vec![1, 1])
            .expect("edge");
        graph
            .add_edge(VertexId(2), VertexId(3), vec![1, 1])
            .expect("edge");

        let artifact = shortest_path(&graph, VertexId(0), VertexId(3)).expect("path");
        assert_eq!(
            artifact.vertices,
            vec![VertexId(0), VertexId(1), VertexId(2), VertexId(3)]
        );

        // Every consecutive pair is an actual edge of the graph.
        for pair in artifact.vertices.windows(2) {
            let hops: Vec<_> = graph.neighbors(pair[0]).iter().map(|e| e.target).collect();
            assert!(hops.contains(&pair[1]));
        }
    }

    #[test]
    fn revisited_vertex_appears_twice_in_the_walk() {
        // With N = 3, looping 0 -> 1 -> 0 re-reaches vertex 0 at phase 2,
        // where the exit edge is cheap: 1 + 1 + 1 beats the direct 9.
        let mut graph = Graph::new(3, 3).expect("graph");
        graph
            .add_edge(VertexId(0), VertexId(1), vec![1, 9, 9])
            .expect("edge");
        graph
            .add_edge(VertexId(1), VertexId(0), vec![9, 1, 9])
            .expect("edge");
        graph
            .add_edge(VertexId(0), VertexId(2), vec![9, 9, 1])
            .expect("edge");

        let artifact = shortest_path(&graph, VertexId(0), VertexId(2)).expect("path");
        assert_eq!(artifact.cost, 3);
        assert_eq!(
            artifact.vertices,
            vec![VertexId(0), VertexId(1), VertexId(0), VertexId(2)]
        );
    }
}
