//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::Serialize;

/// An undirected road between two locations.
/// The distance represents the "weight" of the edge in metres.
#[derive(Debug, PartialEq, Hash, Eq, Clone, Copy, Serialize)]
pub struct Edge<'a> {
    /// One end of the edge.
    pub from: &'a str,

    /// The other end of the edge.
    pub to: &'a str,

    /// The weight of the edge.
    pub distance: OrderedFloat<f64>,
}

impl Edge<'_> {
    /// Returns true if the edge joins `a` and `b`, in either direction.
    pub fn joins(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}
