//! Defines the weighted road graph and associated functions.
//!
//! The graph is undirected: every road is stored twice, once in each
//! endpoint's neighbour list, both entries carrying the same distance.
//! Neighbour lists keep insertion order because BFS and DFS break ties
//! by discovery order.
//!
//! A [`WeightedGraph`] is built once with [`WeightedGraph::build`] and
//! never mutated afterwards, so one instance can be shared by any
//! number of concurrent searches.

use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::types::{
    edge::Edge,
    error::{Result, RouterError},
    record::GraphRecord,
};

/// An immutable, undirected, weighted graph of named locations.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    /// Node names in first-seen order.
    nodes: Vec<String>,

    /// Maps a node name to its position in `nodes` and `adjacency`.
    node_indices: HashMap<String, usize>,

    /// `(neighbour, distance)` pairs per node, in insertion order.
    adjacency: Vec<Vec<(String, f64)>>,

    edge_count: usize,
}

impl WeightedGraph {
    /// Creates a new graph from a graph description.
    ///
    /// Every record's `node` becomes a vertex, as does every neighbour
    /// named in a branch. Each branch entry is inserted in both
    /// directions unless the pair is already adjacent, so a road listed
    /// by both of its endpoints is only stored once.
    ///
    /// Entries with a zero, negative or NaN distance and self-loops are
    /// dropped with a warning.
    ///
    /// # Time Complexity
    /// *O*(*e* * *d*) where *d* is the largest neighbour list, because
    /// of the adjacency check before each insertion.
    pub fn build(records: &[GraphRecord]) -> WeightedGraph {
        build_graph(records)
    }

    /// Parses a JSON graph description and builds the graph from it.
    pub fn from_json(json: &str) -> Result<WeightedGraph> {
        let records: Vec<GraphRecord> = serde_json::from_str(json)?;
        Ok(build_graph(&records))
    }

    /// Returns true if `node` is a vertex of the graph.
    pub fn contains(&self, node: &str) -> bool {
        self.node_indices.contains_key(node)
    }

    /// Returns the `(neighbour, distance)` pairs of `node` in insertion
    /// order. Empty if the node is isolated or absent.
    pub fn neighbors(&self, node: &str) -> &[(String, f64)] {
        match self.node_indices.get(node) {
            Some(&index) => &self.adjacency[index],
            None => &[],
        }
    }

    /// Returns the distance of the road between `from` and `to`, if any.
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|(neighbor, _)| neighbor == to)
            .map(|(_, distance)| *distance)
    }

    /// Iterates over node names in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of undirected edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Get all the edges in the graph, each undirected road once,
    /// oriented from the earlier-seen node to the later one.
    pub fn edges(&self) -> Vec<Edge<'_>> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (index, from) in self.nodes.iter().enumerate() {
            for (to, distance) in &self.adjacency[index] {
                if self.node_indices[to] > index {
                    edges.push(Edge {
                        from,
                        to,
                        distance: OrderedFloat(*distance),
                    });
                }
            }
        }
        edges
    }

    /// Fails with [`RouterError::InvalidNode`] unless `node` is a vertex.
    pub fn require(&self, node: &str) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            error!("Location not found in graph: {}", node);
            Err(RouterError::InvalidNode {
                node: node.to_string(),
            })
        }
    }

    fn add_node(&mut self, node: &str) -> usize {
        if let Some(&index) = self.node_indices.get(node) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(node.to_string());
        self.node_indices.insert(node.to_string(), index);
        self.adjacency.push(Vec::new());
        index
    }

    fn is_adjacent(&self, from: usize, to: &str) -> bool {
        self.adjacency[from].iter().any(|(neighbor, _)| neighbor == to)
    }

    /// Inserts the road in each direction that is not yet present.
    fn connect(&mut self, from: &str, to: &str, distance: f64) {
        let from_index = self.add_node(from);
        let to_index = self.add_node(to);
        let mut inserted = false;
        if !self.is_adjacent(from_index, to) {
            self.adjacency[from_index].push((to.to_string(), distance));
            inserted = true;
        }
        if !self.is_adjacent(to_index, from) {
            self.adjacency[to_index].push((from.to_string(), distance));
            inserted = true;
        }
        if inserted {
            self.edge_count += 1;
        }
    }
}

//---------------------------------------------------------------
// Private functions
//---------------------------------------------------------------

/// See [`WeightedGraph::build`].
fn build_graph(records: &[GraphRecord]) -> WeightedGraph {
    debug!("Building graph from {} records", records.len());
    let mut graph = WeightedGraph::default();
    for record in records {
        graph.add_node(&record.node);
    }

    let mut dropped = 0;
    for record in records {
        for branch in &record.branch {
            graph.add_node(&branch.node);
            if branch.node == record.node {
                warn!("Ignoring self-loop at {}", record.node);
                dropped += 1;
                continue;
            }
            if !branch.distance.is_finite() || branch.distance <= 0.0 {
                warn!(
                    "Ignoring edge {} -> {} with distance {}",
                    record.node, branch.node, branch.distance
                );
                dropped += 1;
                continue;
            }
            graph.connect(&record.node, &branch.node, branch.distance);
        }
    }

    info!(
        "Graph ready: {} nodes, {} edges ({} entries dropped)",
        graph.node_count(),
        graph.edge_count(),
        dropped
    );
    graph
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    fn toy_records() -> Vec<GraphRecord> {
        vec![
            GraphRecord::new("A", [("B", 10.0), ("C", 50.0)]),
            GraphRecord::new("B", [("C", 15.0)]),
            GraphRecord::new("C", [("D", 5.0)]),
            GraphRecord::new("D", []),
        ]
    }

    #[test]
    fn test_build_is_symmetric() {
        let graph = WeightedGraph::build(&toy_records());
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        for edge in graph.edges() {
            assert_eq!(graph.distance(edge.from, edge.to), Some(edge.distance.0));
            assert_eq!(graph.distance(edge.to, edge.from), Some(edge.distance.0));
        }
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let graph = WeightedGraph::build(&toy_records());
        let names = |node| {
            graph
                .neighbors(node)
                .iter()
                .map(|(n, _)| n.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(names("A"), vec!["B", "C"]);
        assert_eq!(names("B"), vec!["A", "C"]);
        assert_eq!(names("C"), vec!["A", "B", "D"]);
        assert_eq!(names("D"), vec!["C"]);
    }

    #[test]
    fn test_duplicate_edges_are_idempotent() {
        let graph = WeightedGraph::build(&[
            GraphRecord::new("A", [("B", 10.0), ("B", 99.0)]),
            GraphRecord::new("B", [("A", 10.0)]),
        ]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors("A").len(), 1);
        assert_eq!(graph.neighbors("B").len(), 1);
        assert_eq!(graph.distance("A", "B"), Some(10.0));
    }

    #[test]
    fn test_degenerate_edges_are_dropped() {
        let graph = WeightedGraph::build(&[
            GraphRecord::new("A", [("A", 5.0), ("B", 0.0), ("C", -3.0), ("D", f64::NAN)]),
            GraphRecord::new("E", [("A", 7.0)]),
            GraphRecord::new("F", [("B", f64::INFINITY)]),
        ]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors("A"), &[("E".to_string(), 7.0)]);
        // the endpoints still exist as isolated locations
        assert!(graph.contains("B"));
        assert!(graph.neighbors("B").is_empty());
        assert!(graph.neighbors("F").is_empty());
    }

    #[test]
    fn test_absent_node() {
        let graph = WeightedGraph::build(&toy_records());
        assert!(!graph.contains("E"));
        assert!(graph.neighbors("E").is_empty());
        assert!(matches!(
            graph.require("E"),
            Err(RouterError::InvalidNode { node }) if node == "E"
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "node": "Stasiun Malang", "branch": [{ "node": "Alun-Alun", "distance": 1200.5 }] },
            { "node": "Alun-Alun", "branch": [] }
        ]"#;
        let graph = WeightedGraph::from_json(json).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.distance("Alun-Alun", "Stasiun Malang"), Some(1200.5));
        assert_eq!(
            graph.nodes().collect::<Vec<_>>(),
            vec!["Stasiun Malang", "Alun-Alun"]
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            WeightedGraph::from_json(r#"[{ "branch": [] }]"#),
            Err(RouterError::Parse(_))
        ));
    }

    #[test]
    fn test_edges_lists_each_road_once() {
        let graph = WeightedGraph::build(&toy_records());
        let edges = graph.edges();
        assert_eq!(edges.len(), graph.edge_count());
        assert!(edges.iter().any(|e| e.joins("D", "C")));
        assert_eq!(edges[0].from, "A");
        assert_eq!(edges[0].to, "B");
    }
}
