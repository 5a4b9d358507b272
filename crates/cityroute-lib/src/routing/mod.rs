//! Route planning: algorithm selection, name dispatch, and the plan
//! orchestrator.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - the five supported strategies and their
//!   user-facing name normalization
//! - [`RouteRequest`] / [`RoutePlan`] - high-level request and result types
//! - [`dispatch`] - run the strategy selected by a user-supplied name
//! - [`plan_route`] - main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Algorithms are encapsulated behind the [`RoutePlanner`] trait so new
//! strategies can be added without modifying the orchestration logic.

mod planner;

pub use planner::{
    select_planner, AStarPlanner, BestFirstPlanner, BfsPlanner, DfsPlanner, IddfsPlanner,
    RoutePlanner,
};

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph};
use crate::map::RouteMap;
use crate::path::SearchResult;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search (fewest hops).
    Bfs,
    /// Depth-first search (first path found).
    Dfs,
    /// Iterative-deepening depth-first search (depth-capped).
    Iddfs,
    /// Greedy best-first search (heuristic only).
    #[serde(rename = "best-first")]
    BestFirst,
    /// A* search (heuristic guided, distance optimal).
    #[default]
    #[serde(rename = "a-star")]
    AStar,
}

impl RouteAlgorithm {
    /// Every algorithm, in dispatch-table order.
    pub const ALL: [Self; 5] = [
        Self::Bfs,
        Self::Dfs,
        Self::Iddfs,
        Self::BestFirst,
        Self::AStar,
    ];

    /// Canonical dispatch token this algorithm matches after normalization.
    fn token(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Iddfs => "IDDFS",
            Self::BestFirst => "BESTFIRST",
            Self::AStar => "A*",
        }
    }

    /// Resolve a user-supplied algorithm name.
    ///
    /// Names are uppercased and stripped of spaces and hyphens before
    /// matching, so `"best-first"`, `"BestFirst"`, and `"BESTFIRST"` are
    /// equivalent, as are `"ID-DFS"` and `"iddfs"`. The `*` is part of the
    /// A* token: `"astar"` does not resolve.
    pub fn parse(name: &str) -> Result<Self> {
        let normalized = name
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect::<String>()
            .to_uppercase();

        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.token() == normalized)
            .ok_or_else(|| Error::UnknownAlgorithm {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dfs => "dfs",
            RouteAlgorithm::Iddfs => "id-dfs",
            RouteAlgorithm::BestFirst => "best-first",
            RouteAlgorithm::AStar => "a*",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::parse(name)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    pub fn new(
        start: impl Into<String>,
        goal: impl Into<String>,
        algorithm: RouteAlgorithm,
    ) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm,
        }
    }

    /// Convenience constructor for BFS routes.
    pub fn bfs(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, RouteAlgorithm::Bfs)
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    /// Sum of edge distances along `steps`, in miles.
    pub total_distance: f64,
    /// Wall-clock time the strategy spent searching.
    pub elapsed: Duration,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Run the strategy selected by a user-supplied algorithm name.
///
/// The name is normalized per [`RouteAlgorithm::parse`]; an unrecognized
/// name yields [`Error::UnknownAlgorithm`] for the caller to surface, never
/// a crash. "No path" stays a normal outcome inside the returned
/// [`SearchResult`].
pub fn dispatch(
    name: &str,
    graph: &Graph,
    map: &RouteMap,
    start: &str,
    goal: &str,
) -> Result<SearchResult> {
    let algorithm = RouteAlgorithm::parse(name)?;
    select_planner(algorithm).find_path(graph, map, start, goal)
}

/// Compute a route using the requested algorithm.
///
/// Builds the graph view, executes the planner, and promotes the "no path"
/// outcome to [`Error::RouteNotFound`] for consumers that want an error
/// surface instead of an optional path.
pub fn plan_route(map: &RouteMap, request: &RouteRequest) -> Result<RoutePlan> {
    let graph = build_graph(map);
    let planner = select_planner(request.algorithm);
    let result = planner.find_path(&graph, map, &request.start, &request.goal)?;

    tracing::debug!(
        algorithm = %request.algorithm,
        start = %request.start,
        goal = %request.goal,
        found = result.found(),
        elapsed_seconds = result.elapsed.as_secs_f64(),
        "search finished"
    );

    let Some(steps) = result.path else {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    };

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: request.start.clone(),
        goal: request.goal.clone(),
        steps,
        total_distance: result.total_distance,
        elapsed: result.elapsed,
    })
}
