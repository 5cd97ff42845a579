//! dual-route: shortest and quickest path between two intersections.
//!
//! Reads a headerless six-column CSV of directed road segments
//! (`from,street_name,to,direction,distance,speed`), builds the road network,
//! and prints turn-by-turn directions for both the minimum-distance and the
//! minimum-time route.
//!
//! Missing `--start` / `--finish` values are prompted for on stdin.  Set
//! `RUST_LOG=info` (or `debug`) for load and search diagnostics.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;

use rr_core::SearchConfig;
use rr_graph::{DualRouter, RoadNetwork};
use rr_loader::{LoadOptions, load_network_csv};
use rr_output::{RouteCsvWriter, write_adjacency_list, write_route_report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Road segment CSV
    #[arg(short, long, default_value = "data.csv")]
    data: PathBuf,

    /// Starting intersection (prompted if omitted)
    #[arg(short, long)]
    start: Option<String>,

    /// Ending intersection (prompted if omitted)
    #[arg(short, long)]
    finish: Option<String>,

    /// The CSV's first row is a header
    #[arg(long)]
    has_headers: bool,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Only names in the `from` column become intersections
    #[arg(long)]
    origins_only: bool,

    /// Run the two searches concurrently (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Stop each search once the finish is settled
    #[arg(long)]
    stop_at_finish: bool,

    /// Also write both routes, one row per step, to this CSV file
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Print the adjacency list after loading
    #[arg(long)]
    dump_graph: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    env_logger::init();

    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", args.delimiter);
    }

    // 1. Load the network.
    let opts = LoadOptions {
        has_headers: args.has_headers,
        delimiter: args.delimiter as u8,
        include_destinations: !args.origins_only,
    };
    let (network, report) = load_network_csv(&args.data, &opts)
        .with_context(|| format!("loading {}", args.data.display()))?;
    for skipped in &report.skipped {
        eprintln!("Skipped line {} ({}): {}", skipped.line, skipped.street, skipped.reason);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.dump_graph {
        write_adjacency_list(&mut out, &network)?;
    }

    // 2. Resolve and validate endpoints.
    let Some(start) = endpoint(&network, args.start, "Enter starting point: ")? else {
        println!("Invalid starting point.");
        return Ok(ExitCode::FAILURE);
    };
    let Some(finish) = endpoint(&network, args.finish, "Enter ending point: ")? else {
        println!("Invalid ending point.");
        return Ok(ExitCode::FAILURE);
    };

    // 3. Route.
    let config = SearchConfig {
        parallel: args.parallel,
        stop_at_finish: args.stop_at_finish,
    };
    let t0 = Instant::now();
    let dual = DualRouter::new(config).find_paths(&network, &start, &finish)?;
    log::info!("routed {start} -> {finish} in {:.3} ms", t0.elapsed().as_secs_f64() * 1e3);

    // 4. Present.
    writeln!(out)?;
    write_route_report(&mut out, &network, &start, &finish, &dual)?;

    if let Some(path) = &args.csv_out {
        let mut writer = RouteCsvWriter::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        writer.write_route(&network, &dual.distance)?;
        writer.write_route(&network, &dual.time)?;
        writer.finish()?;
        log::info!("wrote route steps to {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

/// Take the endpoint from the command line or prompt for it, then check it
/// against the vertex table.  `None` means the name is not an intersection.
fn endpoint(network: &RoadNetwork, given: Option<String>, prompt: &str) -> Result<Option<String>> {
    let name = match given {
        Some(name) => name,
        None => {
            print!("{prompt}");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line.trim().to_owned()
        }
    };
    Ok(network.is_valid_point(&name).then_some(name))
}
