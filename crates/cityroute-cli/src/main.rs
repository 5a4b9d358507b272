//! Command-line driver for the cityroute pathfinder.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cityroute_lib::RouteAlgorithm;

use crate::commands::interactive::handle_interactive_command;
use crate::commands::route::{handle_route_command, RouteCommandArgs};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "City route map utilities")]
struct Cli {
    /// Path to the adjacency list (one whitespace-separated edge per line).
    #[arg(long, global = true, default_value = "Adjacencies.txt")]
    adjacencies: PathBuf,

    /// Path to the coordinate table (name,lat,lon with a header row).
    #[arg(long, global = true, default_value = "coordinates.csv")]
    coordinates: PathBuf,

    /// Output format for route results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two places.
    Route {
        /// Starting place name.
        #[arg(long = "from")]
        from: String,
        /// Destination place name.
        #[arg(long = "to")]
        to: String,
        /// Algorithm to use (bfs, dfs, id-dfs, best-first, a*).
        #[arg(long, default_value = "a*")]
        algorithm: RouteAlgorithm,
    },
    /// Prompt for searches until the user declines to continue.
    Interactive,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
        } => handle_route_command(
            &cli.adjacencies,
            &cli.coordinates,
            cli.format,
            &RouteCommandArgs {
                from,
                to,
                algorithm,
            },
        ),
        Command::Interactive => handle_interactive_command(&cli.adjacencies, &cli.coordinates),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
