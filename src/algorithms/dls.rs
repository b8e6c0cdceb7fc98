//! Depth-limited search.
//!
//! A recursive depth-first descent bounded by `max_depth`, the maximum
//! number of locations on the route (the start counts as depth 1). The
//! only cycle guard is that a node never steps straight back to the node
//! it came from; longer cycles are cut off by the depth limit alone.
//!
//! The first route found wins. There is no iterative deepening: a limit
//! that is too small is a deterministic "not found".
//!
//! The descent uses one stack frame per location on the path, so limits
//! above [`MAX_DEPTH_LIMIT`] are rejected rather than risking the
//! thread's stack.

use crate::algorithms::{multigoal, strategy::SearchStrategy};
use crate::types::{
    error::{Result, RouterError},
    graph::WeightedGraph,
    result::{MultiGoalOutcome, NotFoundReason, SearchOutcome, SearchResult, Trace},
};

/// Largest accepted `max_depth`.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Depth-limited search as a [`SearchStrategy`].
#[derive(Debug, Clone, Copy)]
pub struct DepthLimited {
    /// Maximum number of locations on a route, start included.
    pub max_depth: usize,
}

impl SearchStrategy for DepthLimited {
    fn name(&self) -> &'static str {
        "DLS"
    }

    fn search(&self, graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
        search(graph, start, goal, self.max_depth)
    }
}

/// What one step of the descent produced.
#[derive(Debug, PartialEq)]
enum Descent<'a> {
    /// The goal is below this node. The path is collected while the
    /// recursion unwinds, so it is in reverse order.
    Found { reversed_path: Vec<&'a str>, cost: f64 },
    /// Nothing below this node reaches the goal.
    NotFound,
    /// Some branch below this node was cut by the depth limit.
    DepthExceeded,
}

/// The fixed parameters of one search.
struct Descender<'a> {
    graph: &'a WeightedGraph,
    goal: &'a str,
    max_depth: usize,
}

impl<'a> Descender<'a> {
    fn go_deep(
        &self,
        node: &'a str,
        depth: usize,
        prev: Option<&'a str>,
        cost: f64,
        visited: &mut Trace,
    ) -> Descent<'a> {
        visited.push_node(node);

        if depth > self.max_depth {
            return Descent::DepthExceeded;
        }
        debug!("DLS: visiting {} at depth {} (cost {})", node, depth, cost);

        if node == self.goal {
            return Descent::Found {
                reversed_path: vec![node],
                cost,
            };
        }

        let mut outcome = Descent::NotFound;
        for (neighbor, distance) in self.graph.neighbors(node) {
            if prev == Some(neighbor.as_str()) {
                continue;
            }
            match self.go_deep(neighbor, depth + 1, Some(node), cost + distance, visited) {
                Descent::Found {
                    mut reversed_path,
                    cost,
                } => {
                    reversed_path.push(node);
                    return Descent::Found {
                        reversed_path,
                        cost,
                    };
                }
                Descent::DepthExceeded => outcome = Descent::DepthExceeded,
                Descent::NotFound => {}
            }
        }
        outcome
    }
}

/// Finds a route of at most `max_depth` locations from `start` to `goal`.
///
/// The trace lists every node entered, including entries rejected by
/// the depth limit, so a node may appear several times.
///
/// # Returns
/// [`NotFoundReason::DepthLimit`] when some branch was cut by the
/// limit, [`NotFoundReason::Exhausted`] when the goal is unreachable
/// whatever the limit.
///
/// # Errors
/// [`RouterError::InvalidDepth`] when `max_depth` is zero or above
/// [`MAX_DEPTH_LIMIT`].
pub fn search(
    graph: &WeightedGraph,
    start: &str,
    goal: &str,
    max_depth: usize,
) -> Result<SearchOutcome> {
    graph.require(start)?;
    graph.require(goal)?;
    if max_depth == 0 || max_depth > MAX_DEPTH_LIMIT {
        error!("DLS: depth limit {} outside 1..={}", max_depth, MAX_DEPTH_LIMIT);
        return Err(RouterError::InvalidDepth { max_depth });
    }
    info!(
        "DLS: searching route from {} to {} (max depth {})",
        start, goal, max_depth
    );

    let descender = Descender {
        graph,
        goal,
        max_depth,
    };
    let mut visited = Trace::default();
    let reason = match descender.go_deep(start, 1, None, 0.0, &mut visited) {
        Descent::Found {
            mut reversed_path,
            cost,
        } => {
            reversed_path.reverse();
            info!("DLS: reached {} with cost {}", goal, cost);
            return Ok(SearchOutcome::Found(SearchResult::new(
                &reversed_path,
                cost,
                visited,
            )));
        }
        Descent::DepthExceeded => NotFoundReason::DepthLimit,
        Descent::NotFound => NotFoundReason::Exhausted,
    };

    info!("DLS: no route from {} to {} ({:?})", start, goal, reason);
    Ok(SearchOutcome::NotFound { reason, visited })
}

/// Routes through `goals` in order, each leg bounded by `max_depth`.
pub fn search_multigoal<G: AsRef<str>>(
    graph: &WeightedGraph,
    start: &str,
    goals: &[G],
    max_depth: usize,
) -> Result<MultiGoalOutcome> {
    multigoal::search_multigoal(&DepthLimited { max_depth }, graph, start, goals)
}
