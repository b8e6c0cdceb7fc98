//! Breadth-first search.
//!
//! Explores the graph level by level with a FIFO frontier. The first
//! route found has the fewest roads; distances are summed along the way
//! but never used for ordering, so it is not necessarily the shortest.

use std::collections::{HashSet, VecDeque};

use crate::algorithms::{multigoal, strategy::SearchStrategy};
use crate::types::{
    error::Result,
    graph::WeightedGraph,
    result::{MultiGoalOutcome, NotFoundReason, SearchOutcome, SearchResult, Trace},
};

/// Breadth-first search as a [`SearchStrategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl SearchStrategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
        search(graph, start, goal)
    }
}

/// Finds the route with the fewest roads from `start` to `goal`.
///
/// Nodes are marked as seen when they are discovered, so each node is
/// queued at most once. Neighbours are queued in adjacency order.
///
/// The trace holds the path to every dequeued node.
///
/// # Returns
/// [`SearchOutcome::NotFound`] with [`NotFoundReason::Exhausted`] when
/// the goal is in another component.
pub fn search(graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
    graph.require(start)?;
    graph.require(goal)?;
    info!("BFS: searching route from {} to {}", start, goal);

    let mut frontier: VecDeque<(&str, Vec<&str>, f64)> = VecDeque::new();
    frontier.push_back((start, vec![start], 0.0));
    let mut seen: HashSet<&str> = HashSet::from([start]);
    let mut visited = Trace::default();

    while let Some((node, path, cost)) = frontier.pop_front() {
        debug!("BFS: visiting {} (cost {}, path {:?})", node, cost, path);
        visited.push_path(&path);

        if node == goal {
            info!("BFS: reached {} after {} steps", goal, visited.len());
            return Ok(SearchOutcome::Found(SearchResult::new(&path, cost, visited)));
        }

        for (neighbor, distance) in graph.neighbors(node) {
            if seen.insert(neighbor.as_str()) {
                let mut next = path.clone();
                next.push(neighbor.as_str());
                frontier.push_back((neighbor.as_str(), next, cost + distance));
            }
        }
    }

    info!("BFS: no route from {} to {}", start, goal);
    Ok(SearchOutcome::NotFound {
        reason: NotFoundReason::Exhausted,
        visited,
    })
}

/// Routes through `goals` in order with breadth-first search.
///
/// See [`multigoal::search_multigoal`].
pub fn search_multigoal<G: AsRef<str>>(
    graph: &WeightedGraph,
    start: &str,
    goals: &[G],
) -> Result<MultiGoalOutcome> {
    multigoal::search_multigoal(&BreadthFirst, graph, start, goals)
}
