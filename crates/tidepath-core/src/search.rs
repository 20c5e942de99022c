//! # Search Engine
//!
//! Label-setting search over the expanded `(vertex, phase)` state space.
//!
//! This is a Dijkstra-family search: a state's cost is permanently fixed
//! ("settled") the first time it is popped from the frontier in
//! minimal-cost order, which is only correct because weights are
//! non-negative — `Cost` is unsigned, so that holds by construction.
//!
//! The weight paid for a hop is indexed by the **departure** phase at the
//! source endpoint, never the arrival phase, and phase always starts at 0
//! for the start vertex.

use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::path;
use crate::types::{Cost, PathArtifact, SearchState, TidepathError, VertexId};

// =============================================================================
// LABEL TABLES
// =============================================================================

/// Per-query label tables, indexed by `vertex * N + phase`.
///
/// Allocated fresh for every query and dropped with it; nothing here is
/// shared or recycled across queries.
#[derive(Debug)]
pub(crate) struct Labels {
    period: usize,
    best_cost: Vec<Option<Cost>>,
    predecessor: Vec<Option<SearchState>>,
    settled: Vec<bool>,
}

impl Labels {
    fn new(state_count: usize, period: usize) -> Self {
        Self {
            period,
            best_cost: vec![None; state_count],
            predecessor: vec![None; state_count],
            settled: vec![false; state_count],
        }
    }

    fn index(&self, state: SearchState) -> usize {
        state.vertex.index() * self.period + state.phase
    }

    fn best_cost(&self, state: SearchState) -> Option<Cost> {
        self.best_cost[self.index(state)]
    }

    fn improve(&mut self, state: SearchState, cost: Cost, from: SearchState) {
        let idx = self.index(state);
        self.best_cost[idx] = Some(cost);
        self.predecessor[idx] = Some(from);
    }

    fn seed(&mut self, state: SearchState) {
        let idx = self.index(state);
        self.best_cost[idx] = Some(0);
    }

    fn is_settled(&self, state: SearchState) -> bool {
        self.settled[self.index(state)]
    }

    fn settle(&mut self, state: SearchState) {
        let idx = self.index(state);
        self.settled[idx] = true;
    }

    pub(crate) fn predecessor(&self, state: SearchState) -> Option<SearchState> {
        self.predecessor[self.index(state)]
    }

    pub(crate) fn state_count(&self) -> usize {
        self.best_cost.len()
    }
}

// =============================================================================
// SHORTEST PATH
// =============================================================================

/// Compute a minimum-cost path from `start` to `end` under periodic
/// weights.
///
/// Phase starts at 0 at `start` and advances by 1 (mod `N`) per hop;
/// each hop pays `weights[departure phase]`. Returns the vertex sequence
/// with its total cost and arrival phase.
///
/// # Errors
///
/// - [`TidepathError::InvalidVertex`] if `start` or `end` is out of range.
/// - [`TidepathError::NoPathFound`] if `end` is unreachable from `start`
///   at every phase. This is a normal outcome for disconnected inputs.
pub fn shortest_path(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
) -> Result<PathArtifact, TidepathError> {
    if !graph.contains_vertex(start) {
        return Err(TidepathError::InvalidVertex(start));
    }
    if !graph.contains_vertex(end) {
        return Err(TidepathError::InvalidVertex(end));
    }

    let period = graph.period();
    let mut labels = Labels::new(graph.state_count(), period);
    let mut frontier = Frontier::with_capacity(graph.state_count());

    let origin = SearchState::new(start, 0);
    labels.seed(origin);
    frontier.push(origin, 0);

    while let Some((state, cost)) = frontier.pop_min() {
        // Stale duplicate of an already-settled state: lazy deletion.
        if labels.is_settled(state) {
            continue;
        }
        labels.settle(state);

        // First pop of any state at the end vertex is globally minimal
        // over all states sharing that vertex, so this is an exact early
        // exit, not an approximation.
        if state.vertex == end {
            break;
        }

        let next_phase = (state.phase + 1) % period;
        for edge in graph.neighbors(state.vertex) {
            let next = SearchState::new(edge.target, next_phase);
            let candidate = cost.saturating_add(edge.weights[state.phase]);
            if labels.best_cost(next).is_none_or(|best| candidate < best) {
                labels.improve(next, candidate, state);
                frontier.push(next, candidate);
            }
        }
    }

    // Authoritative arrival-phase selection: scan the end vertex across
    // all phases. The early exit above already popped this minimum, but
    // selection stays decoupled from loop termination.
    let mut best: Option<(usize, Cost)> = None;
    for phase in 0..period {
        if let Some(cost) = labels.best_cost(SearchState::new(end, phase)) {
            if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((phase, cost));
            }
        }
    }
    let (arrival_phase, cost) = best.ok_or(TidepathError::NoPathFound)?;

    let terminal = SearchState::new(end, arrival_phase);
    let vertices = path::reconstruct(&labels, terminal);
    Ok(PathArtifact {
        vertices,
        cost,
        arrival_phase,
    })
}

// =============================================================================
// TESTS
// =============================================================================
