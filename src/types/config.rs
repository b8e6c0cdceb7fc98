//! Router configuration and route requests.
//!
//! Everything a search needs is passed in explicitly: the graph, a
//! [`RouterConfig`] and a [`RouteRequest`]. There is no process-wide
//! state.

use serde::{Deserialize, Serialize};

use crate::types::error::{Result, RouterError};

/// Average speed of a delivery vehicle, 50 km/h in metres per minute.
pub const DEFAULT_AVERAGE_SPEED_M_PER_MIN: f64 = 833.33;

/// Path-finding algorithms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Algorithm {
    /// Breadth-first search; fewest roads.
    BreadthFirst,
    /// Depth-first search; any route.
    DepthFirst,
    /// Depth-first search bounded to `max_depth` locations per route.
    DepthLimited {
        /// Maximum number of locations on a route, start included.
        max_depth: usize,
    },
    /// Uniform-cost search; shortest distance.
    UniformCost,
}

/// Settings shared by every route computed by a router.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Speed used to turn a route distance into a travel time.
    pub average_speed_m_per_min: f64,

    /// Routes whose estimated travel time exceeds this many minutes are
    /// flagged in the report. `None` disables the check.
    pub max_operating_time_min: Option<f64>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            average_speed_m_per_min: DEFAULT_AVERAGE_SPEED_M_PER_MIN,
            max_operating_time_min: None,
        }
    }
}

impl RouterConfig {
    /// Parses a configuration from JSON; missing fields take their
    /// default value.
    pub fn from_json(json: &str) -> Result<RouterConfig> {
        let config: RouterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if !(self.average_speed_m_per_min.is_finite() && self.average_speed_m_per_min > 0.0) {
            return Err(RouterError::InvalidConfig {
                reason: format!(
                    "average speed must be positive, got {}",
                    self.average_speed_m_per_min
                ),
            });
        }
        if let Some(limit) = self.max_operating_time_min {
            if limit.is_nan() || limit < 0.0 {
                return Err(RouterError::InvalidConfig {
                    reason: format!("operating time limit must not be negative, got {}", limit),
                });
            }
        }
        Ok(())
    }
}

/// Query struct to find a route from a start through one or more
/// destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Where the route starts.
    pub start: String,
    /// Destinations, visited in this order.
    pub goals: Vec<String>,
    /// The search algorithm to use.
    pub algorithm: Algorithm,
}

impl RouteRequest {
    /// A request with a single destination.
    pub fn single(start: &str, goal: &str, algorithm: Algorithm) -> Self {
        RouteRequest {
            start: start.to_string(),
            goals: vec![goal.to_string()],
            algorithm,
        }
    }

    /// A request through several destinations, in order.
    pub fn multi<'a>(
        start: &str,
        goals: impl IntoIterator<Item = &'a str>,
        algorithm: Algorithm,
    ) -> Self {
        RouteRequest {
            start: start.to_string(),
            goals: goals.into_iter().map(str::to_string).collect(),
            algorithm,
        }
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<RouteRequest> {
        Ok(serde_json::from_str(json)?)
    }
}
