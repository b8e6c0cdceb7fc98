//! Depth-first search.
//!
//! Uses a LIFO stack. A node is only marked visited when it is popped
//! and expanded, not when it is discovered, so a node may sit on the
//! stack several times until its first expansion. Neighbours are pushed
//! in adjacency order, which means the last-listed neighbour is
//! explored first.
//!
//! No guarantee is made on either road count or distance.

use std::collections::HashSet;

use crate::algorithms::{multigoal, strategy::SearchStrategy};
use crate::types::{
    error::Result,
    graph::WeightedGraph,
    result::{MultiGoalOutcome, NotFoundReason, SearchOutcome, SearchResult, Trace},
};

/// Depth-first search as a [`SearchStrategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl SearchStrategy for DepthFirst {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&self, graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
        search(graph, start, goal)
    }
}

/// Finds some route from `start` to `goal` by depth-first search.
///
/// The trace holds the path of every popped stack entry, including
/// entries for nodes that had already been expanded.
pub fn search(graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
    graph.require(start)?;
    graph.require(goal)?;
    info!("DFS: searching route from {} to {}", start, goal);

    let mut stack: Vec<(&str, Vec<&str>, f64)> = vec![(start, vec![start], 0.0)];
    let mut expanded: HashSet<&str> = HashSet::new();
    let mut visited = Trace::default();

    while let Some((node, path, cost)) = stack.pop() {
        debug!("DFS: visiting {} (cost {}, path {:?})", node, cost, path);
        visited.push_path(&path);

        if node == goal {
            info!("DFS: reached {} after {} steps", goal, visited.len());
            return Ok(SearchOutcome::Found(SearchResult::new(&path, cost, visited)));
        }

        if expanded.insert(node) {
            for (neighbor, distance) in graph.neighbors(node) {
                if !expanded.contains(neighbor.as_str()) {
                    let mut next = path.clone();
                    next.push(neighbor.as_str());
                    stack.push((neighbor.as_str(), next, cost + distance));
                }
            }
        }
    }

    info!("DFS: no route from {} to {}", start, goal);
    Ok(SearchOutcome::NotFound {
        reason: NotFoundReason::Exhausted,
        visited,
    })
}

/// Routes through `goals` in order with depth-first search.
///
/// See [`multigoal::search_multigoal`].
pub fn search_multigoal<G: AsRef<str>>(
    graph: &WeightedGraph,
    start: &str,
    goals: &[G],
) -> Result<MultiGoalOutcome> {
    multigoal::search_multigoal(&DepthFirst, graph, start, goals)
}
