//! # tidepath-core
//!
//! The periodic-weight shortest-path engine for Tidepath - THE LOGIC.
//!
//! Edge costs here are not scalars: every edge carries a vector of `N`
//! non-negative weights, and the weight actually paid on a hop is selected
//! by the current *phase* — the number of hops already taken, modulo `N`.
//! This models recurring schedules and rotating tariffs without continuous
//! time: the search runs over the expanded state space of
//! `(vertex, phase)` pairs, so the same vertex reached at two different
//! phases is two different states with independent best costs.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is strictly sequential: no async, no network, no I/O inside the
//!   search loop (the text loader is the one place that reads)
//! - Allocates label tables and the frontier fresh per query; a `Graph`
//!   is immutable during a search and safely shareable across queries
//! - Never panics on caller input; all failures surface as
//!   [`TidepathError`]

// =============================================================================
// MODULES
// =============================================================================

pub mod frontier;
pub mod graph;
pub mod loader;
pub mod path;
pub mod search;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use frontier::Frontier;
pub use graph::Graph;
pub use loader::{LoadIssue, LoadReport, load_graph, load_graph_from_path};
pub use search::shortest_path;
pub use types::{Cost, PathArtifact, PeriodicEdge, SearchState, TidepathError, VertexId};
