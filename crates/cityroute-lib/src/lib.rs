//! CityRoute library entry points.
//!
//! This crate exposes helpers to load a route map from an adjacency list and
//! a coordinate table, build the routing graph, and run the search-strategy
//! family (BFS, DFS, IDDFS, greedy best-first, A*). Higher-level consumers
//! (the CLI driver) should only depend on the functions exported here
//! instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod graph;
pub mod map;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use geo::{Coordinate, EARTH_RADIUS_MILES};
pub use graph::{build_graph, Graph};
pub use map::RouteMap;
pub use output::RouteSummary;
pub use path::{
    find_route_a_star, find_route_best_first, find_route_bfs, find_route_dfs, find_route_iddfs,
    SearchResult, MAX_SEARCH_DEPTH,
};
pub use routing::{dispatch, plan_route, RouteAlgorithm, RoutePlan, RoutePlanner, RouteRequest};
