//! Adjacency graph consumed by the search strategies.

use std::collections::HashMap;
use std::sync::Arc;

use crate::map::RouteMap;

/// Undirected adjacency over named places.
///
/// Symmetric by construction (the loader inserts both directions for every
/// parsed edge) and immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<String, Vec<String>>>,
}

impl Graph {
    /// Neighbours of a place in file insertion order.
    ///
    /// Unknown places have no outgoing edges; the strategies treat the empty
    /// slice as an exhausted frontier, not an error.
    pub fn neighbours(&self, place: &str) -> &[String] {
        self.adjacency
            .get(place)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of places with at least one recorded edge.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Build the routing graph over a map's adjacency table.
///
/// The adjacency is shared via `Arc`, so this is a cheap handle clone rather
/// than a copy.
pub fn build_graph(map: &RouteMap) -> Graph {
    Graph {
        adjacency: Arc::clone(&map.adjacency),
    }
}
