//! Route map loading and lookup.
//!
//! Parses the adjacency list and the coordinate table into an in-memory
//! [`RouteMap`] that is built once at startup and shared read-only by every
//! search invocation afterwards.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Jaro-Winkler score below which a name is not worth suggesting.
const MIN_SUGGESTION_SIMILARITY: f64 = 0.7;

/// In-memory route map: one coordinate per place plus undirected adjacency.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    pub coordinates: HashMap<String, Coordinate>,
    pub adjacency: Arc<HashMap<String, Vec<String>>>,
}

impl RouteMap {
    /// Load a route map from an adjacency file and a coordinate CSV.
    pub fn from_paths(adjacencies: &Path, coordinates: &Path) -> Result<Self> {
        let adjacency_file = File::open(adjacencies)?;
        let coordinate_file = File::open(coordinates)?;
        let map = Self::from_readers(BufReader::new(adjacency_file), coordinate_file)?;
        debug!(
            places = map.coordinates.len(),
            connected = map.adjacency.len(),
            "loaded route map"
        );
        Ok(map)
    }

    /// Load a route map from readers (e.g. files or in-memory buffers).
    pub fn from_readers<A: BufRead, C: Read>(adjacencies: A, coordinates: C) -> Result<Self> {
        let adjacency = Arc::new(parse_adjacencies(adjacencies)?);
        let coordinates = parse_coordinates(coordinates)?;
        Ok(Self {
            coordinates,
            adjacency,
        })
    }

    /// Whether a place appears in the adjacency or coordinate table.
    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name) || self.coordinates.contains_key(name)
    }

    /// Coordinate for a place, by exact (case-sensitive) name.
    ///
    /// A place referenced without a coordinate entry is a data-integrity
    /// fault; it surfaces as [`Error::MissingCoordinate`] instead of a zero
    /// distance that would silently corrupt every downstream sum.
    pub fn coordinate(&self, name: &str) -> Result<&Coordinate> {
        self.coordinates
            .get(name)
            .ok_or_else(|| Error::MissingCoordinate {
                name: name.to_string(),
            })
    }

    /// Straight-line distance between two named places, in miles.
    pub fn distance_between(&self, from: &str, to: &str) -> Result<f64> {
        Ok(self.coordinate(from)?.distance_to(self.coordinate(to)?))
    }

    /// Closest known place names to `name`, best matches first.
    ///
    /// Diagnostics only; search semantics never depend on fuzzy matching.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut candidates: Vec<&String> = self
            .coordinates
            .keys()
            .chain(self.adjacency.keys())
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        let mut scored: Vec<(f64, &String)> = candidates
            .into_iter()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate))
            .filter(|(score, _)| *score >= MIN_SUGGESTION_SIMILARITY)
            .collect();
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}

/// Parse whitespace-separated place pairs, one undirected edge per line.
///
/// Both directions are inserted for every edge, so the resulting adjacency is
/// symmetric by construction; neighbour order is file order, and self-loops
/// or repeated edges are preserved as given.
fn parse_adjacencies<R: BufRead>(reader: R) -> Result<HashMap<String, Vec<String>>> {
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let mut tokens = record.split_whitespace();
        let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(Error::AdjacencyParse {
                line: index + 1,
                record: record.to_string(),
            });
        };

        adjacency.entry(a.to_string()).or_default().push(b.to_string());
        adjacency.entry(b.to_string()).or_default().push(a.to_string());
    }
    Ok(adjacency)
}

/// Parse `name,latitude,longitude` records, skipping the header row.
fn parse_coordinates<R: Read>(reader: R) -> Result<HashMap<String, Coordinate>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut coordinates = HashMap::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // The header occupies line 1; data records start on line 2.
        let line = index + 2;
        let parse_error = || Error::CoordinateParse {
            line,
            record: record.iter().collect::<Vec<_>>().join(","),
        };

        let name = record.get(0).ok_or_else(parse_error)?;
        let lat = record
            .get(1)
            .and_then(|value| value.parse::<f64>().ok())
            .ok_or_else(parse_error)?;
        let lon = record
            .get(2)
            .and_then(|value| value.parse::<f64>().ok())
            .ok_or_else(parse_error)?;

        coordinates.insert(name.to_string(), Coordinate::new(lat, lon));
    }
    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn sample_map() -> RouteMap {
        let adjacencies = "Anthony Attica\nAttica Harper\nAnthony Harper\n";
        let coordinates = "name,lat,lon\n\
                           Anthony,37.1536,-98.0314\n\
                           Attica,37.2422,-98.2264\n\
                           Harper,37.2864,-98.0262\n";
        RouteMap::from_readers(Cursor::new(adjacencies), Cursor::new(coordinates))
            .expect("sample map loads")
    }

    #[test]
    fn adjacency_is_symmetric_and_file_ordered() {
        let map = sample_map();
        assert_eq!(map.adjacency["Anthony"], vec!["Attica", "Harper"]);
        assert_eq!(map.adjacency["Attica"], vec!["Anthony", "Harper"]);
        assert_eq!(map.adjacency["Harper"], vec!["Attica", "Anthony"]);
    }

    #[test]
    fn duplicate_edges_and_self_loops_are_preserved() {
        let adjacencies = "Anthony Attica\nAnthony Attica\nHarper Harper\n";
        let coordinates = "name,lat,lon\n";
        let map = RouteMap::from_readers(Cursor::new(adjacencies), Cursor::new(coordinates))
            .expect("map loads");
        assert_eq!(map.adjacency["Anthony"], vec!["Attica", "Attica"]);
        assert_eq!(map.adjacency["Harper"], vec!["Harper", "Harper"]);
    }

    #[test]
    fn malformed_adjacency_record_is_rejected() {
        let adjacencies = "Anthony Attica Harper\n";
        let coordinates = "name,lat,lon\n";
        let error = RouteMap::from_readers(Cursor::new(adjacencies), Cursor::new(coordinates))
            .expect_err("three tokens on one line");
        assert!(matches!(error, Error::AdjacencyParse { line: 1, .. }));
    }

    #[test]
    fn malformed_latitude_is_rejected() {
        let adjacencies = "";
        let coordinates = "name,lat,lon\nAnthony,north,-98.0314\n";
        let error = RouteMap::from_readers(Cursor::new(adjacencies), Cursor::new(coordinates))
            .expect_err("latitude is not a number");
        assert!(matches!(error, Error::CoordinateParse { line: 2, .. }));
    }

    #[test]
    fn missing_coordinate_is_a_loud_failure() {
        let map = sample_map();
        let error = map.coordinate("Caldwell").expect_err("unknown place");
        assert!(matches!(error, Error::MissingCoordinate { name } if name == "Caldwell"));
    }

    #[test]
    fn fuzzy_matches_suggest_close_names() {
        let map = sample_map();
        let suggestions = map.fuzzy_matches("Anthoy", 3);
        assert!(suggestions.contains(&"Anthony".to_string()));

        assert!(map.fuzzy_matches("Zzzzzz", 3).is_empty());
    }
}
