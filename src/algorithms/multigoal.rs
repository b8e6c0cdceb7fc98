//! Sequential multi-goal routing.
//!
//! Given a start and an ordered list of destinations, every leg is a
//! separate single-goal search whose start is the previous leg's goal.
//! Legs are solved strictly in the given order; destinations are never
//! reordered or skipped. If one leg has no route, the whole sequence
//! fails.

use crate::algorithms::strategy::SearchStrategy;
use crate::types::{
    error::{Result, RouterError},
    graph::WeightedGraph,
    result::{MultiGoalOutcome, SearchOutcome, SearchResult, Trace},
};

/// Routes from `start` through every location of `goals`, in order.
///
/// All locations are checked before the first leg runs, so an unknown
/// destination fails fast instead of after some legs were searched.
///
/// The joined path drops the repeated junction location between legs,
/// its cost is the sum of the leg costs and its trace pools the traces
/// of all legs.
///
/// # Errors
/// [`RouterError::NoDestinations`] when `goals` is empty,
/// [`RouterError::InvalidNode`] when any location is not in the graph,
/// and whatever the strategy itself rejects.
pub fn search_multigoal<S, G>(
    strategy: &S,
    graph: &WeightedGraph,
    start: &str,
    goals: &[G],
) -> Result<MultiGoalOutcome>
where
    S: SearchStrategy + ?Sized,
    G: AsRef<str>,
{
    if goals.is_empty() {
        return Err(RouterError::NoDestinations);
    }
    graph.require(start)?;
    for goal in goals {
        graph.require(goal.as_ref())?;
    }
    info!(
        "{}: routing from {} through {} destinations",
        strategy.name(),
        start,
        goals.len()
    );

    let mut legs: Vec<SearchResult> = Vec::with_capacity(goals.len());
    let mut pooled = Trace::default();
    let mut from = start;

    for (index, goal) in goals.iter().enumerate() {
        let goal = goal.as_ref();
        debug!("{}: leg {} from {} to {}", strategy.name(), index + 1, from, goal);
        match strategy.search(graph, from, goal)? {
            SearchOutcome::Found(result) => {
                legs.push(result);
            }
            SearchOutcome::NotFound { reason, visited } => {
                warn!(
                    "{}: leg {} from {} to {} has no route",
                    strategy.name(),
                    index + 1,
                    from,
                    goal
                );
                for leg in legs {
                    pooled.append(leg.visited);
                }
                pooled.append(visited);
                return Ok(MultiGoalOutcome::Unreachable {
                    leg: index + 1,
                    from: from.to_string(),
                    to: goal.to_string(),
                    reason,
                    visited: pooled,
                });
            }
        }
        from = goal;
    }

    let result = join_legs(&legs);
    info!(
        "{}: multi-goal route of {} locations, cost {}",
        strategy.name(),
        result.path.len(),
        result.cost
    );
    Ok(MultiGoalOutcome::Found { result, legs })
}

/// Joins consecutive leg results into one route.
fn join_legs(legs: &[SearchResult]) -> SearchResult {
    let mut path: Vec<String> = Vec::new();
    let mut cost = 0.0;
    let mut visited = Trace::default();
    for leg in legs {
        let skip = match (path.last(), leg.path.first()) {
            (Some(last), Some(first)) if last == first => 1,
            _ => 0,
        };
        path.extend(leg.path.iter().skip(skip).cloned());
        cost += leg.cost;
        visited.append(leg.visited.clone());
    }
    SearchResult {
        path,
        cost,
        visited,
    }
}
