//! Randomised checks of the search guarantees.
//!
//! Graphs come from a seeded generator with whole-metre distances, so
//! costs can be compared exactly. Uniform-cost results are checked
//! against petgraph's Dijkstra.

use std::collections::HashMap;

use petgraph::{
    algo::dijkstra,
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use route_search::{
    bfs, dfs, dls, ucs,
    utils::{
        generator::generate_records,
        graph::{is_route, path_cost},
    },
    MultiGoalOutcome, Result, SearchOutcome, SearchResult, WeightedGraph,
};

const SEEDS: u64 = 20;
const NODES: usize = 8;
const EDGES: usize = 10;
const MAX_DISTANCE: u32 = 100;

fn random_graph(seed: u64) -> WeightedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    WeightedGraph::build(&generate_records(&mut rng, NODES, EDGES, MAX_DISTANCE))
}

/// Shortest distances from `start` according to petgraph.
fn oracle(graph: &WeightedGraph, start: &str) -> HashMap<String, f64> {
    let mut oracle: UnGraph<&str, f64> = UnGraph::new_undirected();
    let indices: HashMap<&str, NodeIndex> = graph
        .nodes()
        .map(|node| (node, oracle.add_node(node)))
        .collect();
    for edge in graph.edges() {
        oracle.add_edge(indices[edge.from], indices[edge.to], edge.distance.into_inner());
    }
    dijkstra(&oracle, indices[start], None, |e| *e.weight())
        .into_iter()
        .map(|(index, cost)| (oracle[index].to_string(), cost))
        .collect()
}

fn assert_consistent(graph: &WeightedGraph, result: &SearchResult, start: &str, goal: &str) {
    assert!(
        is_route(graph, &result.path, start, goal),
        "{:?} is not a route from {} to {}",
        result.path,
        start,
        goal
    );
    assert_eq!(path_cost(graph, &result.path), Some(result.cost));
}

#[test]
fn all_algorithms_agree_on_reachability() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed);
        let nodes: Vec<&str> = graph.nodes().collect();
        for &start in &nodes {
            let distances = oracle(&graph, start);
            for &goal in &nodes {
                let reachable = distances.contains_key(goal);
                let outcomes = [
                    bfs::search(&graph, start, goal).unwrap(),
                    dfs::search(&graph, start, goal).unwrap(),
                    dls::search(&graph, start, goal, NODES).unwrap(),
                    ucs::search(&graph, start, goal).unwrap(),
                ];
                for outcome in &outcomes {
                    assert_eq!(outcome.is_found(), reachable, "seed {} {}->{}", seed, start, goal);
                    if let Some(result) = outcome.result() {
                        assert_consistent(&graph, result, start, goal);
                    }
                }
            }
        }
    }
}

#[test]
fn ucs_is_optimal_and_bfs_is_hop_minimal() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed);
        let nodes: Vec<&str> = graph.nodes().collect();
        for &start in &nodes {
            let distances = oracle(&graph, start);
            for &goal in &nodes {
                let Some(best) = ucs::search(&graph, start, goal).unwrap().into_result() else {
                    continue;
                };
                assert_eq!(Some(&best.cost), distances.get(goal));

                let fewest = bfs::search(&graph, start, goal).unwrap().into_result().unwrap();
                let any = dfs::search(&graph, start, goal).unwrap().into_result().unwrap();
                let limited = dls::search(&graph, start, goal, NODES)
                    .unwrap()
                    .into_result()
                    .unwrap();

                for other in [&fewest, &any, &limited] {
                    assert!(best.cost <= other.cost);
                    assert!(fewest.hops() <= other.hops());
                }
                assert!(fewest.hops() <= best.hops());
            }
        }
    }
}

#[test]
fn dls_respects_its_depth_limit() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed);
        let nodes: Vec<&str> = graph.nodes().collect();
        for &start in &nodes {
            for &goal in &nodes {
                let Some(fewest) = bfs::search(&graph, start, goal).unwrap().into_result() else {
                    continue;
                };
                let needed = fewest.path.len();

                for max_depth in 1..=NODES {
                    let outcome = dls::search(&graph, start, goal, max_depth).unwrap();
                    assert_eq!(outcome.is_found(), max_depth >= needed);
                    assert!(outcome.path().len() <= max_depth);
                }
            }
        }
    }
}

type SingleSearch = fn(&WeightedGraph, &str, &str) -> Result<SearchOutcome>;
type MultiSearch = fn(&WeightedGraph, &str, &[&str]) -> Result<MultiGoalOutcome>;

fn dls_single(graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
    dls::search(graph, start, goal, NODES)
}

fn bfs_multi(graph: &WeightedGraph, start: &str, goals: &[&str]) -> Result<MultiGoalOutcome> {
    bfs::search_multigoal(graph, start, goals)
}

fn dfs_multi(graph: &WeightedGraph, start: &str, goals: &[&str]) -> Result<MultiGoalOutcome> {
    dfs::search_multigoal(graph, start, goals)
}

fn dls_multi(graph: &WeightedGraph, start: &str, goals: &[&str]) -> Result<MultiGoalOutcome> {
    dls::search_multigoal(graph, start, goals, NODES)
}

fn ucs_multi(graph: &WeightedGraph, start: &str, goals: &[&str]) -> Result<MultiGoalOutcome> {
    ucs::search_multigoal(graph, start, goals)
}

#[test]
fn multigoal_cost_is_sum_of_legs() {
    let algorithms: [(&str, SingleSearch, MultiSearch); 4] = [
        ("BFS", bfs::search, bfs_multi),
        ("DFS", dfs::search, dfs_multi),
        ("DLS", dls_single, dls_multi),
        ("UCS", ucs::search, ucs_multi),
    ];
    let mut rng = StdRng::seed_from_u64(99);
    for seed in 0..SEEDS {
        let graph = random_graph(seed);
        let nodes: Vec<&str> = graph.nodes().collect();
        for _ in 0..10 {
            let start = *nodes.choose(&mut rng).unwrap();
            let goals: Vec<&str> = nodes.choose_multiple(&mut rng, 3).copied().collect();

            for (name, single, multi) in algorithms {
                let outcome = multi(&graph, start, &goals).unwrap();
                let mut from = start;
                let mut expected_path = vec![start.to_string()];
                let mut expected_cost = 0.0;
                let mut reachable = true;
                for &goal in &goals {
                    match single(&graph, from, goal).unwrap().into_result() {
                        Some(leg) => {
                            expected_cost += leg.cost;
                            // junction locations appear once
                            expected_path.extend(leg.path.into_iter().skip(1));
                        }
                        None => {
                            reachable = false;
                            break;
                        }
                    }
                    from = goal;
                }

                match outcome {
                    MultiGoalOutcome::Found { result, legs } => {
                        assert!(reachable, "{} seed {}", name, seed);
                        assert_eq!(legs.len(), goals.len());
                        assert_eq!(result.cost, expected_cost, "{} seed {}", name, seed);
                        assert_eq!(result.path, expected_path, "{} seed {}", name, seed);
                        assert!(is_route(&graph, &result.path, start, goals[goals.len() - 1]));
                    }
                    MultiGoalOutcome::Unreachable { .. } => {
                        assert!(!reachable, "{} seed {}", name, seed)
                    }
                }
            }
        }
    }
}
