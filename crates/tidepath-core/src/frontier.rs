//! # Frontier Queue
//!
//! A binary min-heap over `(state, cost)` entries ordered solely by cost.
//!
//! The queue deliberately allows multiple live entries for the same state
//! at different costs: the search engine never decreases a key, it pushes
//! a fresh entry on every improvement and discards stale ones at pop time
//! by checking its own settled flags (lazy deletion). Ties are broken
//! arbitrarily, so path *shape* under equal-cost ties is unspecified;
//! cost is not.
//!
//! Sift-up and sift-down are iterative loops; depth is bounded by
//! `log(V * N)` either way, but iteration keeps the frontier free of
//! stack growth on large graphs.

use crate::types::{Cost, SearchState};

// =============================================================================
// FRONTIER
// =============================================================================

/// One heap entry: a state and the cost it was discovered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    state: SearchState,
    cost: Cost,
}

/// Min-heap frontier for the label-setting search.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: Vec<FrontierEntry>,
}

impl Frontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty frontier with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of live entries (stale duplicates included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the frontier has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry. `O(log n)`.
    pub fn push(&mut self, state: SearchState, cost: Cost) {
        self.entries.push(FrontierEntry { state, cost });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the minimum-cost entry, or `None` when empty.
    /// `O(log n)`.
    pub fn pop_min(&mut self) -> Option<(SearchState, Cost)> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        let root = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((root.state, root.cost))
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].cost >= self.entries[parent].cost {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && self.entries[left].cost < self.entries[smallest].cost {
                smallest = left;
            }
            if right < len && self.entries[right].cost < self.entries[smallest].cost {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
