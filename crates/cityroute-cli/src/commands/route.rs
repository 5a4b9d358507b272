//! Route command handler for computing a single path between two places.

use std::path::Path;

use anyhow::{Context, Result};

use cityroute_lib::{
    plan_route, Error as LibError, RouteAlgorithm, RouteMap, RouteRequest, RouteSummary,
};

use crate::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting place name.
    pub from: String,
    /// Destination place name.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
}

/// Handle the route subcommand.
pub fn handle_route_command(
    adjacencies: &Path,
    coordinates: &Path,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let map = load_map(adjacencies, coordinates)?;
    let request = RouteRequest::new(args.from.clone(), args.to.clone(), args.algorithm);

    match plan_route(&map, &request) {
        Ok(plan) => {
            match format {
                OutputFormat::Text => println!("{}", RouteSummary::from_plan(&plan)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
            }
            Ok(())
        }
        Err(error @ LibError::RouteNotFound { .. }) => {
            suggest_unknown_places(&map, [&args.from, &args.to]);
            Err(error).context("route planning failed")
        }
        Err(error) => Err(error).context("route planning failed"),
    }
}

/// Load the route map with path context attached to any failure.
pub fn load_map(adjacencies: &Path, coordinates: &Path) -> Result<RouteMap> {
    RouteMap::from_paths(adjacencies, coordinates).with_context(|| {
        format!(
            "failed to load route map from {} and {}",
            adjacencies.display(),
            coordinates.display()
        )
    })
}

/// Print "did you mean" hints for names missing from the map entirely.
fn suggest_unknown_places<'a>(map: &RouteMap, names: impl IntoIterator<Item = &'a String>) {
    for name in names {
        if map.contains(name) {
            continue;
        }
        let suggestions = map.fuzzy_matches(name, 3);
        if suggestions.is_empty() {
            eprintln!("Unknown place '{name}'.");
        } else {
            eprintln!(
                "Unknown place '{name}'. Did you mean one of: {}?",
                suggestions.join(", ")
            );
        }
    }
}
