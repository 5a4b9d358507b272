//! Route planning strategies implementing the Strategy pattern.
//!
//! Each implementation encapsulates one search algorithm; the dispatcher
//! selects a planner without knowing anything about frontier mechanics, so
//! adding a strategy never touches the orchestration code.

use crate::error::Result;
use crate::graph::Graph;
use crate::map::RouteMap;
use crate::path::{
    find_route_a_star, find_route_best_first, find_route_bfs, find_route_dfs, find_route_iddfs,
    SearchResult,
};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph and coordinate table.
    ///
    /// "No path" is a normal outcome inside the returned [`SearchResult`];
    /// the error channel is reserved for data-integrity faults such as a
    /// missing coordinate.
    fn find_path(
        &self,
        graph: &Graph,
        map: &RouteMap,
        start: &str,
        goal: &str,
    ) -> Result<SearchResult>;
}

/// Breadth-first planner: fewest hops, edge weights ignored.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(
        &self,
        graph: &Graph,
        map: &RouteMap,
        start: &str,
        goal: &str,
    ) -> Result<SearchResult> {
        find_route_bfs(graph, map, start, goal)
    }
}

/// Depth-first planner: first path found, possibly long.
#[derive(Debug, Clone, Default)]
pub struct DfsPlanner;

impl RoutePlanner for DfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dfs
    }

    fn find_path(
        &self,
        graph: &Graph,
        map: &RouteMap,
        start: &str,
        goal: &str,
    ) -> Result<SearchResult> {
        find_route_dfs(graph, map, start, goal)
    }
}

/// Iterative-deepening planner: hop-shortest within the depth cap.
#[derive(Debug, Clone, Default)]
pub struct IddfsPlanner;

impl RoutePlanner for IddfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Iddfs
    }

    fn find_path(
        &self,
        graph: &Graph,
        map: &RouteMap,
        start: &str,
        goal: &str,
    ) -> Result<SearchResult> {
        find_route_iddfs(graph, map, start, goal)
    }
}

/// Greedy best-first planner: heuristic only, no optimality guarantee.
#[derive(Debug, Clone, Default)]
pub struct BestFirstPlanner;

impl RoutePlanner for BestFirstPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::BestFirst
    }

    fn find_path(
        &self,
        graph: &Graph,
        map: &RouteMap,
        start: &str,
        goal: &str,
    ) -> Result<SearchResult> {
        find_route_best_first(graph, map, start, goal)
    }
}

/// A* planner: distance-optimal under the straight-line heuristic.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &Graph,
        map: &RouteMap,
        start: &str,
        goal: &str,
    ) -> Result<SearchResult> {
        find_route_a_star(graph, map, start, goal)
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Bfs => Box::new(BfsPlanner),
        RouteAlgorithm::Dfs => Box::new(DfsPlanner),
        RouteAlgorithm::Iddfs => Box::new(IddfsPlanner),
        RouteAlgorithm::BestFirst => Box::new(BestFirstPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planners_report_their_algorithm() {
        assert_eq!(BfsPlanner.algorithm(), RouteAlgorithm::Bfs);
        assert_eq!(DfsPlanner.algorithm(), RouteAlgorithm::Dfs);
        assert_eq!(IddfsPlanner.algorithm(), RouteAlgorithm::Iddfs);
        assert_eq!(BestFirstPlanner.algorithm(), RouteAlgorithm::BestFirst);
        assert_eq!(AStarPlanner.algorithm(), RouteAlgorithm::AStar);
    }

    #[test]
    fn select_planner_covers_every_algorithm() {
        for algorithm in RouteAlgorithm::ALL {
            let planner = select_planner(algorithm);
            assert_eq!(planner.algorithm(), algorithm);
        }
    }
}
