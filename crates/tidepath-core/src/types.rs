//! # Core Type Definitions
//!
//! This module contains all core types for the Tidepath engine:
//! - Graph identifiers (`VertexId`, `Cost`)
//! - The periodic edge representation (`PeriodicEdge`)
//! - The expanded search state (`SearchState`)
//! - Query output (`PathArtifact`)
//! - Error types (`TidepathError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Use saturating arithmetic for cost accumulation to prevent overflow
//! - Implement `Ord` where deterministic ordering matters

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier for a vertex in the graph, valid in `[0, V)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Create a new vertex identifier.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accumulated traversal cost.
///
/// Unsigned by construction: the label-setting search is only correct for
/// non-negative weights, so negative costs are unrepresentable rather than
/// merely forbidden. Accumulation saturates instead of wrapping.
pub type Cost = u64;

// =============================================================================
// PERIODIC EDGE
// =============================================================================

/// A directed edge whose cost varies with the departure phase.
///
/// `weights` has length exactly `N` (the graph period); `weights[p]` is
/// the cost paid when the edge is traversed while in phase `p`. Parallel
/// edges between the same ordered pair are permitted and never
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicEdge {
    /// The vertex this edge leads to.
    pub target: VertexId,
    /// Per-phase traversal costs, one per phase.
    pub weights: Vec<Cost>,
}

impl PeriodicEdge {
    /// Create a new periodic edge.
    #[must_use]
    pub const fn new(target: VertexId, weights: Vec<Cost>) -> Self {
        Self { target, weights }
    }
}

// =============================================================================
// SEARCH STATE
// =============================================================================

/// A `(vertex, phase)` pair — the actual unit of shortest-path search.
///
/// The same vertex visited at two different phases is a distinct state
/// with its own best cost and its own predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SearchState {
    /// The vertex component.
    pub vertex: VertexId,
    /// Position within the weight cycle, always in `[0, N)`.
    pub phase: usize,
}

impl SearchState {
    /// Create a new search state.
    #[must_use]
    pub const fn new(vertex: VertexId, phase: usize) -> Self {
        Self { vertex, phase }
    }
}

// =============================================================================
// PATH ARTIFACT
// =============================================================================

/// The result of a successful shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathArtifact {
    /// The vertex sequence from start to end, inclusive.
    pub vertices: Vec<VertexId>,
    /// Total cost of the path, summing `weights[phase]` per hop.
    pub cost: Cost,
    /// The phase in effect when the end vertex was reached.
    pub arrival_phase: usize,
}

impl PathArtifact {
    /// Number of hops in the path (vertices minus one).
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Tidepath engine.
///
/// - No silent failures
/// - Use `Result<T, TidepathError>` for fallible operations
/// - The CORE should never panic; all errors must be recoverable
///
/// `NoPathFound` is a normal, expected query outcome, not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TidepathError {
    /// Graph construction was attempted with a zero vertex count or period.
    #[error("Invalid configuration: {vertices} vertices, period {period}")]
    InvalidConfiguration {
        /// Requested vertex count.
        vertices: usize,
        /// Requested period.
        period: usize,
    },

    /// A vertex reference was outside `[0, V)`.
    #[error("Invalid vertex: {0}")]
    InvalidVertex(VertexId),

    /// An edge weight vector did not have exactly `N` entries.
    #[error("Invalid weight vector: expected {expected} weights, got {actual}")]
    InvalidWeightVector {
        /// The graph period `N`.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },

    /// The query was valid but the end vertex is unreachable at every phase.
    #[error("No path found")]
    NoPathFound,

    /// A loader input line did not parse into an edge description.
    #[error("Malformed line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number in the input.
        line: usize,
        /// What went wrong with the line.
        reason: String,
    },

    /// An I/O error occurred while reading input.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
