//! The seam between the search algorithms and their callers.
//!
//! Each algorithm module exposes free `search` functions and a unit
//! (or small) struct implementing [`SearchStrategy`], so code that only
//! needs "some single-goal search" - such as the
//! [multi-goal sequencer](super::multigoal) - can be generic over it.

use crate::types::{error::Result, graph::WeightedGraph, result::SearchOutcome};

/// A single-goal search algorithm.
pub trait SearchStrategy {
    /// Short display name, e.g. `"BFS"`.
    fn name(&self) -> &'static str;

    /// Searches `graph` for a route from `start` to `goal`.
    ///
    /// Fails with [`RouterError::InvalidNode`] if either location is not
    /// in the graph. A missing route is a
    /// [`SearchOutcome::NotFound`], not an error.
    ///
    /// [`RouterError::InvalidNode`]: crate::types::error::RouterError::InvalidNode
    fn search(&self, graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome>;
}
