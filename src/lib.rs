//! Delivery Routing Search Library.
//! Finds routes between named locations of a road network with the
//! classic uninformed search strategies: breadth-first, depth-first,
//! depth-limited and uniform-cost search.
//!
//! Build a [`WeightedGraph`] once from the data layer's
//! [`GraphRecord`]s, then either call an algorithm module directly
//! ([`bfs::search`], [`ucs::search_multigoal`], ...) or hand a
//! [`RouteRequest`] to a [`Router`] to also get timing and travel time
//! figures.
//!
//! ```
//! use route_search::{ucs, GraphRecord, WeightedGraph};
//!
//! let graph = WeightedGraph::build(&[
//!     GraphRecord::new("A", [("B", 10.0), ("C", 50.0)]),
//!     GraphRecord::new("B", [("C", 15.0)]),
//!     GraphRecord::new("C", [("D", 5.0)]),
//! ]);
//! let outcome = ucs::search(&graph, "A", "D").unwrap();
//! assert_eq!(outcome.path(), ["A", "B", "C", "D"]);
//! assert_eq!(outcome.cost(), Some(30.0));
//! ```

#[macro_use]
extern crate log;

/// Graph, request, result and error types, plus the router engine.
pub mod types {
    pub mod config;
    pub mod edge;
    pub mod error;
    pub mod graph;
    pub mod record;
    pub mod result;
    pub mod router;
}

/// The search algorithms.
pub mod algorithms {
    pub mod bfs;
    pub mod dfs;
    pub mod dls;
    pub mod multigoal;
    pub mod strategy;
    pub mod ucs;
}

/// Helpers around the core types.
pub mod utils {
    pub mod generator;
    pub mod graph;
    pub mod travel;
}

pub use algorithms::{
    bfs::{self, BreadthFirst},
    dfs::{self, DepthFirst},
    dls::{self, DepthLimited},
    multigoal::search_multigoal,
    strategy::SearchStrategy,
    ucs::{self, UniformCost},
};
pub use types::{
    config::{Algorithm, RouteRequest, RouterConfig},
    edge::Edge,
    error::{Result, RouterError},
    graph::WeightedGraph,
    record::{BranchRecord, GraphRecord},
    result::{MultiGoalOutcome, NotFoundReason, SearchOutcome, SearchResult, Trace, TraceEntry},
    router::engine::{RouteOutcome, RouteReport, Router},
};
