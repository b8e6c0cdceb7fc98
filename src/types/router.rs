//! The core of the router library.
//!
//! The engine module wraps a built [`WeightedGraph`] and runs the
//! requested search algorithm for a [`RouteRequest`], producing a
//! [`RouteReport`](engine::RouteReport) with the route, the number of
//! visited nodes, the computation time and a travel time estimate.

/// The router engine module.
pub mod engine {
    use std::time::{Duration, Instant};

    use serde::Serialize;

    use crate::{
        algorithms::{
            bfs, dfs, dls, multigoal::search_multigoal, strategy::SearchStrategy, ucs,
        },
        types::{
            config::{Algorithm, RouteRequest, RouterConfig},
            error::{Result, RouterError},
            graph::WeightedGraph,
            result::{MultiGoalOutcome, SearchOutcome, Trace},
        },
        utils::travel::estimate_travel_time_minutes,
    };

    impl SearchStrategy for Algorithm {
        fn name(&self) -> &'static str {
            match self {
                Algorithm::BreadthFirst => "BFS",
                Algorithm::DepthFirst => "DFS",
                Algorithm::DepthLimited { .. } => "DLS",
                Algorithm::UniformCost => "UCS",
            }
        }

        fn search(&self, graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
            match *self {
                Algorithm::BreadthFirst => bfs::search(graph, start, goal),
                Algorithm::DepthFirst => dfs::search(graph, start, goal),
                Algorithm::DepthLimited { max_depth } => dls::search(graph, start, goal, max_depth),
                Algorithm::UniformCost => ucs::search(graph, start, goal),
            }
        }
    }

    /// A Router struct borrows a built graph and holds the settings
    /// used for every route it computes.
    ///
    /// The graph is only read, so several routers (or threads sharing
    /// one router) may search the same graph at once.
    #[derive(Debug, Clone, Copy)]
    pub struct Router<'a> {
        graph: &'a WeightedGraph,
        config: RouterConfig,
    }

    /// What a route request produced.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub enum RouteOutcome {
        /// Outcome of a request with one destination.
        Single(SearchOutcome),
        /// Outcome of a request with several destinations.
        Multi(MultiGoalOutcome),
    }

    impl RouteOutcome {
        /// Returns true if a route was found.
        pub fn is_found(&self) -> bool {
            match self {
                RouteOutcome::Single(outcome) => outcome.is_found(),
                RouteOutcome::Multi(outcome) => outcome.is_found(),
            }
        }

        /// The route's locations; empty when no route was found.
        pub fn path(&self) -> &[String] {
            match self {
                RouteOutcome::Single(outcome) => outcome.path(),
                RouteOutcome::Multi(outcome) => outcome.path(),
            }
        }

        /// Total route distance, if a route was found.
        pub fn cost(&self) -> Option<f64> {
            match self {
                RouteOutcome::Single(outcome) => outcome.cost(),
                RouteOutcome::Multi(outcome) => outcome.result().map(|result| result.cost),
            }
        }

        /// The (pooled) search trace.
        pub fn visited(&self) -> &Trace {
            match self {
                RouteOutcome::Single(outcome) => outcome.visited(),
                RouteOutcome::Multi(outcome) => outcome.visited(),
            }
        }
    }

    /// The result of [`Router::find_route`].
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct RouteReport {
        /// The algorithm that produced the route.
        pub algorithm: Algorithm,
        /// The route, or why there is none.
        pub outcome: RouteOutcome,
        /// Number of search steps recorded in the trace.
        pub visited_count: usize,
        /// Wall-clock time spent searching.
        pub computation_time: Duration,
        /// Estimated driving time in minutes, if a route was found.
        pub estimated_travel_min: Option<f64>,
        /// True if the estimate exceeds the configured operating time.
        pub exceeds_operating_time: bool,
    }

    impl RouteReport {
        /// The ordered location sequence to hand to a map renderer.
        pub fn path(&self) -> &[String] {
            self.outcome.path()
        }

        /// Total route distance in metres, if a route was found.
        pub fn cost(&self) -> Option<f64> {
            self.outcome.cost()
        }
    }

    impl<'a> Router<'a> {
        /// Creates a new router over the given graph.
        ///
        /// # Errors
        /// [`RouterError::InvalidConfig`] if `config` does not validate.
        pub fn new(graph: &'a WeightedGraph, config: RouterConfig) -> Result<Router<'a>> {
            config.validate()?;
            info!(
                "Router ready: {} nodes, {} edges",
                graph.node_count(),
                graph.edge_count()
            );
            Ok(Router { graph, config })
        }

        /// The graph searched by this router.
        pub fn graph(&self) -> &'a WeightedGraph {
            self.graph
        }

        /// The settings of this router.
        pub fn config(&self) -> &RouterConfig {
            &self.config
        }

        /// Find a route for the request.
        ///
        /// One destination runs a single-goal search; several run the
        /// multi-goal sequencer with the same algorithm.
        ///
        /// # Errors
        /// Caller-contract violations only: unknown locations, no
        /// destinations, or an invalid depth limit. A request without a
        /// route still yields a report.
        pub fn find_route(&self, request: &RouteRequest) -> Result<RouteReport> {
            info!("[1/3] Validating route request");
            if request.goals.is_empty() {
                error!("Route request without destinations");
                return Err(RouterError::NoDestinations);
            }
            self.graph.require(&request.start)?;
            for goal in &request.goals {
                self.graph.require(goal)?;
            }

            info!("[2/3] Searching with {}", request.algorithm.name());
            let started = Instant::now();
            let outcome = match request.goals.as_slice() {
                [goal] => RouteOutcome::Single(request.algorithm.search(
                    self.graph,
                    &request.start,
                    goal,
                )?),
                goals => RouteOutcome::Multi(search_multigoal(
                    &request.algorithm,
                    self.graph,
                    &request.start,
                    goals,
                )?),
            };
            let computation_time = started.elapsed();
            debug!("computation_time: {:?}", computation_time);

            info!("[3/3] Estimating travel time");
            let estimated_travel_min = outcome
                .cost()
                .map(|cost| estimate_travel_time_minutes(cost, self.config.average_speed_m_per_min))
                .transpose()?;
            let exceeds_operating_time =
                match (estimated_travel_min, self.config.max_operating_time_min) {
                    (Some(minutes), Some(limit)) => minutes > limit,
                    _ => false,
                };
            if exceeds_operating_time {
                warn!(
                    "Route takes {:.2} minutes, over the operating time limit of {:?} minutes",
                    estimated_travel_min.unwrap_or_default(),
                    self.config.max_operating_time_min
                );
            }

            let report = RouteReport {
                algorithm: request.algorithm,
                visited_count: outcome.visited().len(),
                outcome,
                computation_time,
                estimated_travel_min,
                exceeds_operating_time,
            };
            info!(
                "Route {}: {} locations, {} visited",
                if report.outcome.is_found() {
                    "found"
                } else {
                    "not found"
                },
                report.path().len(),
                report.visited_count
            );
            Ok(report)
        }
    }
}
