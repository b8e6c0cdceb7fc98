//! Uniform-cost search.
//!
//! Dijkstra-style single-pair shortest path: the frontier is a min-heap
//! keyed by accumulated distance, and the first time the goal is popped
//! its route is optimal because all distances are positive.
//!
//! Frontier entries compare by `(cost, node, path)`, so equal-cost ties
//! are broken lexicographically by node name and then by path.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use ordered_float::OrderedFloat;

use crate::algorithms::{multigoal, strategy::SearchStrategy};
use crate::types::{
    error::Result,
    graph::WeightedGraph,
    result::{MultiGoalOutcome, NotFoundReason, SearchOutcome, SearchResult, Trace},
};

/// Uniform-cost search as a [`SearchStrategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl SearchStrategy for UniformCost {
    fn name(&self) -> &'static str {
        "UCS"
    }

    fn search(&self, graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
        search(graph, start, goal)
    }
}

/// A pending route in the frontier. Field order is the comparison order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry<'a> {
    cost: OrderedFloat<f64>,
    node: &'a str,
    path: Vec<&'a str>,
}

/// Finds the shortest route from `start` to `goal`.
///
/// A neighbour is pushed only when the new distance improves on its
/// best known one. Entries made stale by a later improvement are
/// skipped when popped.
///
/// The trace lists each expanded node once, in expansion order.
pub fn search(graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
    graph.require(start)?;
    graph.require(goal)?;
    info!("UCS: searching route from {} to {}", start, goal);

    let mut open = BinaryHeap::new();
    open.push(Reverse(FrontierEntry {
        cost: OrderedFloat(0.0),
        node: start,
        path: vec![start],
    }));
    let mut best_cost: HashMap<&str, f64> = HashMap::from([(start, 0.0)]);
    let mut expanded: HashSet<&str> = HashSet::new();
    let mut visited = Trace::default();

    while let Some(Reverse(FrontierEntry { cost, node, path })) = open.pop() {
        let cost = cost.into_inner();
        if best_cost.get(node).map_or(false, |&best| cost > best) {
            debug!("UCS: skipping stale entry for {} at {}", node, cost);
            continue;
        }

        debug!("UCS: visiting {} (cost {}, path {:?})", node, cost, path);
        if expanded.insert(node) {
            visited.push_node(node);
        }

        if node == goal {
            info!("UCS: reached {} with cost {}", goal, cost);
            return Ok(SearchOutcome::Found(SearchResult::new(&path, cost, visited)));
        }

        for (neighbor, distance) in graph.neighbors(node) {
            let candidate = cost + distance;
            let improves = best_cost
                .get(neighbor.as_str())
                .map_or(true, |&best| candidate < best);
            if improves {
                best_cost.insert(neighbor.as_str(), candidate);
                let mut next = path.clone();
                next.push(neighbor.as_str());
                open.push(Reverse(FrontierEntry {
                    cost: OrderedFloat(candidate),
                    node: neighbor.as_str(),
                    path: next,
                }));
            }
        }
    }

    info!("UCS: no route from {} to {}", start, goal);
    Ok(SearchOutcome::NotFound {
        reason: NotFoundReason::Exhausted,
        visited,
    })
}

/// Routes through `goals` in order with uniform-cost search.
///
/// Each leg is optimal on its own; the sequence as a whole is not
/// reordered.
pub fn search_multigoal<G: AsRef<str>>(
    graph: &WeightedGraph,
    start: &str,
    goals: &[G],
) -> Result<MultiGoalOutcome> {
    multigoal::search_multigoal(&UniformCost, graph, start, goals)
}

#[cfg(test)]
mod ucs_tests {
    use super::*;
    use crate::types::{error::RouterError, record::GraphRecord};

    fn toy_graph() -> WeightedGraph {
        WeightedGraph::build(&[
            GraphRecord::new("A", [("B", 10.0), ("C", 50.0)]),
            GraphRecord::new("B", [("C", 15.0)]),
            GraphRecord::new("C", [("D", 5.0)]),
            GraphRecord::new("D", []),
        ])
    }

    #[test]
    fn test_cheapest_route_wins() {
        let outcome = search(&toy_graph(), "A", "D").unwrap();
        assert_eq!(outcome.path(), &["A", "B", "C", "D"].map(String::from));
        assert_eq!(outcome.cost(), Some(30.0));
    }

    /// C is first pushed at 50 and then improved to 25; the stale entry
    /// must not show up twice in the trace.
    #[test]
    fn test_trace_is_deduplicated() {
        let outcome = search(&toy_graph(), "A", "D").unwrap();
        assert_eq!(
            outcome.visited().nodes().collect::<Vec<_>>(),
            vec!["A", "B", "C", "D"]
        );
    }

    #[test]
    fn test_ties_break_by_node_name() {
        // two routes of cost 2 to D: via B and via C
        let graph = WeightedGraph::build(&[
            GraphRecord::new("A", [("C", 1.0), ("B", 1.0)]),
            GraphRecord::new("B", [("D", 1.0)]),
            GraphRecord::new("C", [("D", 1.0)]),
        ]);
        let outcome = search(&graph, "A", "D").unwrap();
        assert_eq!(outcome.path(), &["A", "B", "D"].map(String::from));
        assert_eq!(outcome.cost(), Some(2.0));
    }

    #[test]
    fn test_unreachable_goal() {
        let graph = WeightedGraph::build(&[
            GraphRecord::new("A", [("B", 4.0)]),
            GraphRecord::new("E", []),
        ]);
        let outcome = search(&graph, "A", "E").unwrap();
        assert!(!outcome.is_found());
        assert_eq!(outcome.visited().nodes().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_invalid_node() {
        let err = search(&toy_graph(), "A", "E").unwrap_err();
        assert!(matches!(err, RouterError::InvalidNode { node } if node == "E"));
    }
}
