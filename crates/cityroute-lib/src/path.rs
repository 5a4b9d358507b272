//! Search strategies over the routing graph.
//!
//! Each strategy walks the shared [`Graph`]/[`RouteMap`] pair and reports a
//! [`SearchResult`]: the path when one exists, the summed haversine distance
//! along it, and the wall-clock time spent inside the call. The five
//! strategies differ only in frontier ordering, visited-set policy, and cost
//! accounting; they share path reconstruction and distance summation.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::Result;
use crate::graph::Graph;
use crate::map::RouteMap;

/// Depth cap for iterative-deepening search. Goals needing more hops than
/// this are reported as "no path" even when a deeper route exists.
pub const MAX_SEARCH_DEPTH: usize = 30;

/// Outcome of a single strategy invocation.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Places visited from start to goal inclusive; `None` when no path
    /// exists.
    pub path: Option<Vec<String>>,
    /// Sum of edge distances along `path`, in miles; zero when no path
    /// exists. Only optimal for the strategies that guarantee it.
    pub total_distance: f64,
    /// Wall-clock time spent inside the search call, reported win or lose.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Whether the search produced a path.
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of edges in the returned path; zero when no path exists.
    pub fn hop_count(&self) -> usize {
        self.path
            .as_ref()
            .map(|path| path.len().saturating_sub(1))
            .unwrap_or(0)
    }
}

/// Breadth-first search: fewest hops, edge weights ignored.
pub fn find_route_bfs(
    graph: &Graph,
    map: &RouteMap,
    start: &str,
    goal: &str,
) -> Result<SearchResult> {
    let started = Instant::now();
    let path = bfs(graph, start, goal);
    finish(map, path, started)
}

fn bfs<'a>(graph: &'a Graph, start: &'a str, goal: &'a str) -> Option<Vec<String>> {
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut parents: HashMap<&'a str, Option<&'a str>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbour in graph.neighbours(current) {
            let next = neighbour.as_str();
            // Visited at enqueue time; the parents map doubles as the marker.
            if parents.contains_key(next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == goal {
                return Some(reconstruct_path(&parents, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Depth-first search: returns the first path found, with no optimality
/// guarantee. Neighbours are pushed in reverse adjacency order so the
/// first-listed neighbour is expanded first.
pub fn find_route_dfs(
    graph: &Graph,
    map: &RouteMap,
    start: &str,
    goal: &str,
) -> Result<SearchResult> {
    let started = Instant::now();
    let path = dfs(graph, start, goal);
    finish(map, path, started)
}

fn dfs<'a>(graph: &'a Graph, start: &'a str, goal: &'a str) -> Option<Vec<String>> {
    let mut parents: HashMap<&'a str, Option<&'a str>> = HashMap::new();
    let mut stack = vec![start];

    parents.insert(start, None);

    while let Some(current) = stack.pop() {
        if current == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for neighbour in graph.neighbours(current).iter().rev() {
            let next = neighbour.as_str();
            // Visited at push time; cycles never re-enter the stack.
            if parents.contains_key(next) {
                continue;
            }
            parents.insert(next, Some(current));
            stack.push(next);
        }
    }

    None
}

/// Iterative-deepening depth-first search: hop-shortest within
/// [`MAX_SEARCH_DEPTH`], "no path" beyond it even when a deeper route exists.
pub fn find_route_iddfs(
    graph: &Graph,
    map: &RouteMap,
    start: &str,
    goal: &str,
) -> Result<SearchResult> {
    let started = Instant::now();
    let path = iddfs(graph, start, goal);
    finish(map, path, started)
}

fn iddfs<'a>(graph: &'a Graph, start: &'a str, goal: &'a str) -> Option<Vec<String>> {
    for depth in 0..=MAX_SEARCH_DEPTH {
        // Fresh per-iteration state; `on_path` tracks the active recursion
        // path so one depth-limited pass can never loop.
        let mut path: Vec<&'a str> = vec![start];
        let mut on_path: HashSet<&'a str> = HashSet::new();
        on_path.insert(start);

        if depth_limited(graph, start, goal, depth, &mut path, &mut on_path) {
            return Some(path.into_iter().map(str::to_string).collect());
        }
    }

    None
}

fn depth_limited<'a>(
    graph: &'a Graph,
    current: &'a str,
    goal: &str,
    depth: usize,
    path: &mut Vec<&'a str>,
    on_path: &mut HashSet<&'a str>,
) -> bool {
    if current == goal {
        return true;
    }
    if depth == 0 {
        return false;
    }

    for neighbour in graph.neighbours(current) {
        let next = neighbour.as_str();
        if !on_path.insert(next) {
            continue;
        }

        path.push(next);
        if depth_limited(graph, next, goal, depth - 1, path, on_path) {
            return true;
        }
        path.pop();
        on_path.remove(next);
    }

    false
}

/// Greedy best-first search: frontier ordered by straight-line distance to
/// the goal, accumulated path cost ignored. Not optimal.
pub fn find_route_best_first(
    graph: &Graph,
    map: &RouteMap,
    start: &str,
    goal: &str,
) -> Result<SearchResult> {
    let started = Instant::now();
    let path = best_first(graph, map, start, goal)?;
    finish(map, path, started)
}

fn best_first<'a>(
    graph: &'a Graph,
    map: &RouteMap,
    start: &'a str,
    goal: &'a str,
) -> Result<Option<Vec<String>>> {
    if start == goal {
        return Ok(Some(vec![start.to_string()]));
    }

    let mut parents: HashMap<&'a str, Option<&'a str>> = HashMap::new();
    let mut expanded: HashSet<&'a str> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    parents.insert(start, None);
    // The start pops first regardless of its estimate.
    frontier.push(HeapEntry::new(start, 0.0));

    while let Some(entry) = frontier.pop() {
        // Visited at expansion time: later frontier duplicates of an
        // already-expanded place are skipped here.
        if !expanded.insert(entry.node) {
            continue;
        }

        if entry.node == goal {
            return Ok(Some(reconstruct_path(&parents, start, goal)));
        }

        for neighbour in graph.neighbours(entry.node) {
            let next = neighbour.as_str();
            if expanded.contains(next) {
                continue;
            }

            // A place may sit on the frontier several times before its first
            // expansion; only the first discovery records a parent.
            parents.entry(next).or_insert(Some(entry.node));
            let estimate = map.distance_between(next, goal)?;
            frontier.push(HeapEntry::new(next, estimate));
        }
    }

    Ok(None)
}

/// A* search: frontier ordered by f = g + h with the straight-line distance
/// heuristic. Optimal, since the heuristic never overestimates the true
/// remaining distance.
pub fn find_route_a_star(
    graph: &Graph,
    map: &RouteMap,
    start: &str,
    goal: &str,
) -> Result<SearchResult> {
    let started = Instant::now();
    let path = a_star(graph, map, start, goal)?;
    finish(map, path, started)
}

fn a_star<'a>(
    graph: &'a Graph,
    map: &RouteMap,
    start: &'a str,
    goal: &'a str,
) -> Result<Option<Vec<String>>> {
    if start == goal {
        return Ok(Some(vec![start.to_string()]));
    }

    let mut g_score: HashMap<&'a str, f64> = HashMap::new();
    let mut parents: HashMap<&'a str, Option<&'a str>> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    g_score.insert(start, 0.0);
    parents.insert(start, None);
    let start_estimate = map.distance_between(start, goal)?;
    frontier.push(AStarEntry::new(start, 0.0, start_estimate));

    while let Some(entry) = frontier.pop() {
        // Skip entries superseded by a cheaper rediscovery; there is no
        // closed set, stale duplicates are pruned here instead.
        match g_score.get(entry.node) {
            Some(score) if *score < entry.cost.0 => continue,
            Some(_) => {}
            None => continue,
        }

        if entry.node == goal {
            return Ok(Some(reconstruct_path(&parents, start, goal)));
        }

        let current_cost = entry.cost.0;
        for neighbour in graph.neighbours(entry.node) {
            let next = neighbour.as_str();
            let tentative = current_cost + map.distance_between(entry.node, next)?;

            // Reconsidered only on a strictly smaller tentative cost.
            if tentative < *g_score.get(next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative);
                parents.insert(next, Some(entry.node));
                let heuristic = map.distance_between(next, goal)?;
                frontier.push(AStarEntry::new(next, tentative, heuristic));
            }
        }
    }

    Ok(None)
}

fn finish(map: &RouteMap, path: Option<Vec<String>>, started: Instant) -> Result<SearchResult> {
    let total_distance = match &path {
        Some(path) => path_distance(map, path)?,
        None => 0.0,
    };
    Ok(SearchResult {
        path,
        total_distance,
        elapsed: started.elapsed(),
    })
}

/// Sum of consecutive-pair distances along a path.
fn path_distance(map: &RouteMap, path: &[String]) -> Result<f64> {
    let mut total = 0.0;
    for pair in path.windows(2) {
        total += map.distance_between(&pair[0], &pair[1])?;
    }
    Ok(total)
}

fn reconstruct_path(
    parents: &HashMap<&str, Option<&str>>,
    start: &str,
    goal: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Best-first frontier entry ordered by heuristic estimate alone.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct HeapEntry<'a> {
    node: &'a str,
    estimate: FloatOrd,
}

impl<'a> HeapEntry<'a> {
    fn new(node: &'a str, estimate: f64) -> Self {
        Self {
            node,
            estimate: FloatOrd(estimate),
        }
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate;
        // ties pop the lexicographically smaller place first.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* frontier entry carrying the accumulated cost and the f = g + h key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl<'a> AStarEntry<'a> {
    fn new(node: &'a str, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_entries_pop_smallest_estimate_first() {
        let mut frontier = BinaryHeap::new();
        frontier.push(HeapEntry::new("Harper", 12.0));
        frontier.push(HeapEntry::new("Attica", 3.0));
        frontier.push(HeapEntry::new("Caldwell", 7.5));

        let order: Vec<&str> = std::iter::from_fn(|| frontier.pop().map(|entry| entry.node))
            .collect();
        assert_eq!(order, ["Attica", "Caldwell", "Harper"]);
    }

    #[test]
    fn equal_estimates_break_ties_on_place_name() {
        let mut frontier = BinaryHeap::new();
        frontier.push(HeapEntry::new("Wellington", 5.0));
        frontier.push(HeapEntry::new("Argonia", 5.0));

        let first = frontier.pop().expect("two entries queued");
        assert_eq!(first.node, "Argonia");
    }

    #[test]
    fn a_star_entries_order_by_combined_estimate() {
        let mut frontier = BinaryHeap::new();
        frontier.push(AStarEntry::new("Harper", 10.0, 1.0));
        frontier.push(AStarEntry::new("Attica", 2.0, 3.0));

        let first = frontier.pop().expect("two entries queued");
        assert_eq!(first.node, "Attica");
    }

    #[test]
    fn hop_count_is_edges_not_places() {
        let found = SearchResult {
            path: Some(vec!["A".into(), "B".into(), "C".into()]),
            total_distance: 2.0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(found.hop_count(), 2);
        assert!(found.found());

        let missed = SearchResult {
            path: None,
            total_distance: 0.0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(missed.hop_count(), 0);
        assert!(!missed.found());
    }
}
