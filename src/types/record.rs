//! The graph description records handed over by the data layer.
//!
//! A description is an ordered list of [`GraphRecord`]s. Each record
//! names a location and the road distances (metres) to some of its
//! neighbours:
//!
//! ```json
//! [
//!   { "node": "A", "branch": [{ "node": "B", "distance": 10.0 }] },
//!   { "node": "B", "branch": [] }
//! ]
//! ```
//!
//! Records may list an edge only once; the graph builder mirrors it.

use serde::{Deserialize, Serialize};

/// One location and its listed neighbours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    /// Name of the location.
    pub node: String,

    /// Neighbours in the order the data source listed them. The order
    /// is kept, it decides BFS/DFS tie-breaking.
    #[serde(default)]
    pub branch: Vec<BranchRecord>,
}

/// A neighbour entry inside a [`GraphRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRecord {
    /// Name of the neighbouring location.
    pub node: String,

    /// Road distance in metres.
    pub distance: f64,
}

impl GraphRecord {
    /// Creates a record from a location name and `(neighbour, distance)`
    /// pairs.
    pub fn new<'a>(node: &str, branch: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        GraphRecord {
            node: node.to_string(),
            branch: branch
                .into_iter()
                .map(|(node, distance)| BranchRecord {
                    node: node.to_string(),
                    distance,
                })
                .collect(),
        }
    }
}
