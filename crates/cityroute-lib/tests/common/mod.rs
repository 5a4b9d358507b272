//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::fmt::Write as _;
use std::io::Cursor;

use cityroute_lib::RouteMap;

/// Build a map from inline adjacency and coordinate text.
pub fn build_map(adjacencies: &str, coordinates: &str) -> RouteMap {
    RouteMap::from_readers(Cursor::new(adjacencies.to_string()), Cursor::new(coordinates.to_string()))
        .expect("fixture map loads")
}

/// Four south-Kansas towns where Anthony and Harper are directly connected
/// as well as linked through Attica, and Argonia hangs off Harper.
pub fn diamond_map() -> RouteMap {
    build_map(
        "Anthony Attica\n\
         Attica Harper\n\
         Anthony Harper\n\
         Harper Argonia\n",
        "name,lat,lon\n\
         Anthony,37.1536,-98.0314\n\
         Attica,37.2422,-98.2264\n\
         Harper,37.2864,-98.0262\n\
         Argonia,37.2656,-97.7647\n\
         Coldwater,37.2689,-99.3237\n",
    )
}

/// Grid laid out near the equator so degree deltas read as distances: a
/// two-hop detour through a far-off interchange versus a three-hop corridor
/// of short legs. The detour edge is listed first.
pub fn detour_map() -> RouteMap {
    build_map(
        "Start Detour\n\
         Detour Goal\n\
         Start AlphaLeg\n\
         AlphaLeg BetaLeg\n\
         BetaLeg Goal\n",
        "name,lat,lon\n\
         Start,0.0,0.0\n\
         AlphaLeg,0.0,1.0\n\
         BetaLeg,0.0,2.0\n\
         Goal,0.0,3.0\n\
         Detour,2.5,1.5\n",
    )
}

/// A lure close to the goal as the crow flies, reached early, that drags the
/// heuristic-only strategy onto a long three-leg ride; the two-leg route via
/// Bend is shorter overall but looks worse from the start.
pub fn lure_map() -> RouteMap {
    build_map(
        "Start Lure\n\
         Start Bend\n\
         Lure Ridge\n\
         Ridge Goal\n\
         Bend Goal\n",
        "name,lat,lon\n\
         Start,0.0,0.0\n\
         Lure,0.5,3.5\n\
         Ridge,2.0,3.9\n\
         Bend,1.0,2.0\n\
         Goal,0.0,4.0\n",
    )
}

/// Straight chain of `stops` places, `stops - 1` hops end to end.
pub fn chain_map(stops: usize) -> RouteMap {
    let mut adjacencies = String::new();
    let mut coordinates = String::from("name,lat,lon\n");
    for index in 0..stops {
        if index + 1 < stops {
            let _ = writeln!(adjacencies, "{} {}", stop_name(index), stop_name(index + 1));
        }
        let _ = writeln!(coordinates, "{},0.0,{:.2}", stop_name(index), index as f64 * 0.05);
    }
    build_map(&adjacencies, &coordinates)
}

pub fn stop_name(index: usize) -> String {
    format!("Stop{index:02}")
}

/// Assert that a path is a real walk through the map: correct endpoints and
/// every consecutive pair backed by an adjacency edge.
pub fn assert_valid_walk(map: &RouteMap, path: &[String], start: &str, goal: &str) {
    assert_eq!(path.first().map(String::as_str), Some(start), "path starts at start");
    assert_eq!(path.last().map(String::as_str), Some(goal), "path ends at goal");
    for pair in path.windows(2) {
        let neighbours = map
            .adjacency
            .get(&pair[0])
            .unwrap_or_else(|| panic!("{} has edges", pair[0]));
        assert!(
            neighbours.contains(&pair[1]),
            "{} -> {} is an edge",
            pair[0],
            pair[1]
        );
    }
}
