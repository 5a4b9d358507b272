//! Interactive driver: repeatedly prompt for a start, a goal, and an
//! algorithm, then print the resulting route.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use cityroute_lib::{build_graph, dispatch, Error as LibError, RouteMap};

/// Shown for every non-fatal miss. Unknown algorithms, unknown places, and
/// exhausted searches are deliberately indistinguishable to the user.
const NO_ROUTE_MESSAGE: &str = "No route found or invalid algorithm.";

/// Handle the interactive subcommand.
pub fn handle_interactive_command(adjacencies: &Path, coordinates: &Path) -> Result<()> {
    let map = crate::commands::route::load_map(adjacencies, coordinates)?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_loop(&map, &mut input, &mut output)
}

/// The prompt loop, generic over reader and writer so tests can drive it
/// with in-memory buffers.
fn run_loop<R: BufRead, W: Write>(map: &RouteMap, input: &mut R, output: &mut W) -> Result<()> {
    let graph = build_graph(map);

    loop {
        let Some(start) = prompt(input, output, "Enter the start city: ")? else {
            break;
        };
        let Some(goal) = prompt(input, output, "Enter the end city: ")? else {
            break;
        };
        writeln!(
            output,
            "Available search algorithms: BFS, DFS, ID-DFS, BestFirst, A*"
        )?;
        let Some(algorithm) = prompt(input, output, "Enter the search algorithm: ")? else {
            break;
        };

        match dispatch(&algorithm, &graph, map, &start, &goal) {
            Ok(result) => match result.path {
                Some(path) => {
                    writeln!(output, "Route: {}", path.join(" -> "))?;
                    writeln!(output, "Total distance: {:.2} miles", result.total_distance)?;
                    writeln!(
                        output,
                        "Elapsed time: {:.4} seconds",
                        result.elapsed.as_secs_f64()
                    )?;
                }
                None => writeln!(output, "{NO_ROUTE_MESSAGE}")?,
            },
            Err(LibError::UnknownAlgorithm { .. }) => writeln!(output, "{NO_ROUTE_MESSAGE}")?,
            // Data-integrity faults surface instead of hiding behind the
            // generic miss message.
            Err(error) => return Err(error.into()),
        }

        let Some(again) = prompt(input, output, "Search again? (y/n): ")? else {
            break;
        };
        if !again.eq_ignore_ascii_case("y") && !again.eq_ignore_ascii_case("yes") {
            break;
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line; `None` means end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
