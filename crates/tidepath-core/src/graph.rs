//! # Graph Store
//!
//! Owns the vertices and periodic edges and exposes adjacency lookup.
//!
//! The adjacency structure is sized dynamically from the constructor
//! arguments — there is no compile-time vertex or period bound — and
//! every insertion is validated up front, so downstream indexing into
//! the adjacency table cannot go out of range.

use crate::types::{Cost, PeriodicEdge, TidepathError, VertexId};
use serde::{Deserialize, Serialize};

// =============================================================================
// GRAPH
// =============================================================================

/// A directed graph with periodic edge weights.
///
/// Immutable for the duration of any search: queries take `&Graph`, so
/// concurrent searches over one graph are safe by construction. All
/// mutation happens through [`Graph::add_edge`] before querying begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Number of vertices `V`; valid vertex ids are `[0, V)`.
    vertex_count: usize,
    /// Period `N` of every weight vector, `N >= 1`.
    period: usize,
    /// Adjacency list: outgoing edges per source vertex, insertion order.
    adjacency: Vec<Vec<PeriodicEdge>>,
    /// Total number of edges, counting parallel edges separately.
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph with `vertex_count` vertices and period
    /// `period`.
    ///
    /// Returns [`TidepathError::InvalidConfiguration`] if either is zero.
    pub fn new(vertex_count: usize, period: usize) -> Result<Self, TidepathError> {
        if vertex_count == 0 || period == 0 {
            return Err(TidepathError::InvalidConfiguration {
                vertices: vertex_count,
                period,
            });
        }
        Ok(Self {
            vertex_count,
            period,
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        })
    }

    /// Append a directed edge `src -> dst` with one weight per phase.
    ///
    /// Takes ownership of `weights`. Parallel edges are kept, not merged.
    ///
    /// Returns [`TidepathError::InvalidVertex`] if either endpoint is out
    /// of range, [`TidepathError::InvalidWeightVector`] if `weights` does
    /// not have exactly `period` entries.
    pub fn add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        weights: Vec<Cost>,
    ) -> Result<(), TidepathError> {
        if !self.contains_vertex(src) {
            return Err(TidepathError::InvalidVertex(src));
        }
        if !self.contains_vertex(dst) {
            return Err(TidepathError::InvalidVertex(dst));
        }
        if weights.len() != self.period {
            return Err(TidepathError::InvalidWeightVector {
                expected: self.period,
                actual: weights.len(),
            });
        }
        self.adjacency[src.index()].push(PeriodicEdge::new(dst, weights));
        self.edge_count = self.edge_count.saturating_add(1);
        Ok(())
    }

    /// Outgoing edges of `v` in insertion order; empty for a vertex with
    /// no outgoing edges or an out-of-range id.
    #[must_use]
    pub fn neighbors(&self, v: VertexId) -> &[PeriodicEdge] {
        self.adjacency.get(v.index()).map_or(&[], Vec::as_slice)
    }

    /// Check whether `v` is a valid vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.index() < self.vertex_count
    }

    /// Number of vertices `V`.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Period `N` of the weight cycle.
    #[must_use]
    pub fn period(&self) -> usize {
        self.period
    }

    /// Total number of edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Size of the expanded `(vertex, phase)` state space, `V * N`.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.vertex_count.saturating_mul(self.period)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Graph::new(0, 2),
            Err(TidepathError::InvalidConfiguration {
                vertices: 0,
                period: 2
            })
        ));
        assert!(matches!(
            Graph::new(3, 0),
            Err(TidepathError::InvalidConfiguration {
                vertices: 3,
                period: 0
            })
        ));
    }

    #[test]
    fn add_edge_validates_endpoints() {
        let mut graph = Graph::new(2, 1).expect("graph");

        let err = graph.add_edge(VertexId(2), VertexId(0), vec![1]);
        assert_eq!(err, Err(TidepathError::InvalidVertex(VertexId(2))));

        let err = graph.add_edge(VertexId(0), VertexId(5), vec![1]);
        assert_eq!(err, Err(TidepathError::InvalidVertex(VertexId(5))));

        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_edge_validates_weight_length() {
        let mut graph = Graph::new(2, 3).expect("graph");

        let err = graph.add_edge(VertexId(0), VertexId(1), vec![1, 2]);
        assert_eq!(
            err,
            Err(TidepathError::InvalidWeightVector {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn neighbors_preserve_insertion_order() {
        let mut graph = Graph::new(3, 1).expect("graph");
        graph
            .add_edge(VertexId(0), VertexId(2), vec![7])
            .expect("edge");
        graph
            .add_edge(VertexId(0), VertexId(1), vec![3])
            .expect("edge");

        let targets: Vec<_> = graph.neighbors(VertexId(0)).iter().map(|e| e.target).collect();
        assert_eq!(targets, vec![VertexId(2), VertexId(1)]);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = Graph::new(2, 2).expect("graph");
        graph
            .add_edge(VertexId(0), VertexId(1), vec![1, 2])
            .expect("edge");
        graph
            .add_edge(VertexId(0), VertexId(1), vec![9, 9])
            .expect("edge");

        assert_eq!(graph.neighbors(VertexId(0)).len(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn neighbors_of_sink_is_empty() {
        let graph = Graph::new(2, 1).expect("graph");
        assert!(graph.neighbors(VertexId(1)).is_empty());
        // Out-of-range lookup is total, not a panic.
        assert!(graph.neighbors(VertexId(99)).is_empty());
    }

    #[test]
    fn state_count_is_v_times_n() {
        let graph = Graph::new(4, 3).expect("graph");
        assert_eq!(graph.state_count(), 12);
    }
}
