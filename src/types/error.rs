//! Definition of the [`RouterError`] type.
//!
//! Only caller-contract violations are errors. A search that simply
//! cannot reach its goal is a regular
//! [`SearchOutcome::NotFound`](super::result::SearchOutcome::NotFound).

use thiserror::Error;

/// Errors raised by graph loading, route requests and searches.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The start or a goal is not a vertex of the graph.
    #[error("location `{node}` is not in the graph")]
    InvalidNode {
        /// The unknown location name.
        node: String,
    },

    /// Depth-limited search needs room for at least the start node and
    /// accepts at most `dls::MAX_DEPTH_LIMIT` nodes.
    #[error("depth limit must be between 1 and 1024, got {max_depth}")]
    InvalidDepth {
        /// The rejected limit.
        max_depth: usize,
    },

    /// A multi-goal request was made without any destination.
    #[error("at least one destination is required")]
    NoDestinations,

    /// The router configuration cannot be used.
    #[error("invalid router configuration: {reason}")]
    InvalidConfig {
        /// Human readable explanation.
        reason: String,
    },

    /// A graph description or request could not be decoded.
    #[error("failed to parse JSON input")]
    Parse(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RouterError>;
