//! Result types shared by all search algorithms.
//!
//! Every single-goal search returns a [`SearchOutcome`]: either a
//! [`SearchResult`] or an explicit "not found". Multi-goal searches
//! return a [`MultiGoalOutcome`] which also tells which leg failed.

use serde::Serialize;

/// One diagnostic record of a search step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TraceEntry {
    /// The path leading to a dequeued node (BFS and DFS).
    Path(Vec<String>),
    /// A node that was expanded or entered (UCS and DLS).
    Node(String),
}

impl TraceEntry {
    /// The node this entry is about: the node itself, or the last node
    /// of the recorded path.
    pub fn node(&self) -> Option<&str> {
        match self {
            TraceEntry::Path(path) => path.last().map(String::as_str),
            TraceEntry::Node(node) => Some(node),
        }
    }
}

/// The ordered record of what a search examined.
///
/// Not used for correctness; it backs the "visited nodes" figure of a
/// route report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub(crate) fn push_path(&mut self, path: &[&str]) {
        self.entries.push(TraceEntry::Path(
            path.iter().map(|node| node.to_string()).collect(),
        ));
    }

    pub(crate) fn push_node(&mut self, node: &str) {
        self.entries.push(TraceEntry::Node(node.to_string()));
    }

    pub(crate) fn append(&mut self, other: Trace) {
        self.entries.extend(other.entries);
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the recorded steps in order.
    pub fn iter(&self) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter()
    }

    /// Iterates over the node of each recorded step.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(TraceEntry::node)
    }
}

/// A route found by a search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Locations from start to goal, both included.
    pub path: Vec<String>,

    /// Sum of the road distances along `path`, in metres.
    pub cost: f64,

    /// What the search examined on the way.
    pub visited: Trace,
}

impl SearchResult {
    pub(crate) fn new(path: &[&str], cost: f64, visited: Trace) -> Self {
        SearchResult {
            path: path.iter().map(|node| node.to_string()).collect(),
            cost,
            visited,
        }
    }

    /// Number of roads travelled.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Why a search ended without a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotFoundReason {
    /// Everything reachable was explored.
    Exhausted,
    /// Depth-limited search hit its limit on at least one branch; a
    /// larger limit might succeed.
    DepthLimit,
}

/// The outcome of a single-goal search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchOutcome {
    /// A route was found.
    Found(SearchResult),

    /// The goal cannot be reached from the start.
    NotFound {
        /// Why the search gave up.
        reason: NotFoundReason,
        /// What the search examined before giving up.
        visited: Trace,
    },
}

impl SearchOutcome {
    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The route, if one was found.
    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            SearchOutcome::Found(result) => Some(result),
            SearchOutcome::NotFound { .. } => None,
        }
    }

    /// Consumes the outcome, returning the route if one was found.
    pub fn into_result(self) -> Option<SearchResult> {
        match self {
            SearchOutcome::Found(result) => Some(result),
            SearchOutcome::NotFound { .. } => None,
        }
    }

    /// The route's locations; empty when no route was found.
    pub fn path(&self) -> &[String] {
        self.result()
            .map(|result| result.path.as_slice())
            .unwrap_or_default()
    }

    /// The route's cost, if one was found.
    pub fn cost(&self) -> Option<f64> {
        self.result().map(|result| result.cost)
    }

    /// The search trace, whatever the outcome.
    pub fn visited(&self) -> &Trace {
        match self {
            SearchOutcome::Found(result) => &result.visited,
            SearchOutcome::NotFound { visited, .. } => visited,
        }
    }
}

/// The outcome of a multi-goal search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MultiGoalOutcome {
    /// Every leg was routed.
    Found {
        /// The joined route, with the pooled trace of every leg.
        result: SearchResult,
        /// Each leg's own result, in order.
        legs: Vec<SearchResult>,
    },

    /// A leg could not be routed; the whole sequence fails.
    Unreachable {
        /// 1-based number of the failing leg.
        leg: usize,
        /// Start of the failing leg.
        from: String,
        /// Goal of the failing leg.
        to: String,
        /// Why the failing leg gave up.
        reason: NotFoundReason,
        /// Traces of all legs up to and including the failing one.
        visited: Trace,
    },
}

impl MultiGoalOutcome {
    /// Returns true if every leg was routed.
    pub fn is_found(&self) -> bool {
        matches!(self, MultiGoalOutcome::Found { .. })
    }

    /// The joined route, if every leg was routed.
    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            MultiGoalOutcome::Found { result, .. } => Some(result),
            MultiGoalOutcome::Unreachable { .. } => None,
        }
    }

    /// The joined route's locations; empty on failure.
    pub fn path(&self) -> &[String] {
        self.result()
            .map(|result| result.path.as_slice())
            .unwrap_or_default()
    }

    /// The pooled trace, whatever the outcome.
    pub fn visited(&self) -> &Trace {
        match self {
            MultiGoalOutcome::Found { result, .. } => &result.visited,
            MultiGoalOutcome::Unreachable { visited, .. } => visited,
        }
    }
}

#[cfg(test)]
mod result_tests {
    use super::*;

    #[test]
    fn test_trace_nodes() {
        let mut trace = Trace::default();
        trace.push_path(&["A"]);
        trace.push_path(&["A", "B"]);
        trace.push_node("C");
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.nodes().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_not_found_has_empty_path() {
        let outcome = SearchOutcome::NotFound {
            reason: NotFoundReason::Exhausted,
            visited: Trace::default(),
        };
        assert!(!outcome.is_found());
        assert!(outcome.path().is_empty());
        assert_eq!(outcome.cost(), None);
    }

    #[test]
    fn test_hops() {
        let result = SearchResult::new(&["A", "B", "C"], 25.0, Trace::default());
        assert_eq!(result.hops(), 2);
        let trivial = SearchResult::new(&["A"], 0.0, Trace::default());
        assert_eq!(trivial.hops(), 0);
    }

    #[test]
    fn test_serializes_trace_entries_untagged() {
        let mut trace = Trace::default();
        trace.push_path(&["A", "B"]);
        trace.push_node("B");
        let json = serde_json::to_string(&trace).unwrap();
        assert_eq!(json, r#"[["A","B"],"B"]"#);
    }
}
