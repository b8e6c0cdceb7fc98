//! Helper functions for working with routes over a graph.

use crate::types::graph::WeightedGraph;

/// Sums the road distances along `path`.
///
/// # Returns
/// [`None`] if two consecutive locations are not joined by a road.
/// A single-location path costs 0.
///
/// # Time Complexity
/// *O*(*n* * *d*) for a path of *n* locations with at most *d*
/// neighbours each.
pub fn path_cost<N: AsRef<str>>(graph: &WeightedGraph, path: &[N]) -> Option<f64> {
    path.windows(2).try_fold(0.0, |cost, pair| {
        graph
            .distance(pair[0].as_ref(), pair[1].as_ref())
            .map(|distance| cost + distance)
    })
}

/// Returns true if `path` is a walk in `graph` from `start` to `goal`.
pub fn is_route<N: AsRef<str>>(graph: &WeightedGraph, path: &[N], start: &str, goal: &str) -> bool {
    match (path.first(), path.last()) {
        (Some(first), Some(last)) => {
            first.as_ref() == start && last.as_ref() == goal && path_cost(graph, path).is_some()
        }
        _ => false,
    }
}
