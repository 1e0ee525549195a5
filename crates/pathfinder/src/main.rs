pub mod config;
pub mod csv_loader;
pub mod error;
pub mod labels;
pub mod loader;
pub mod query;

use std::env;
use std::process;

use pathfind_core::GraphCsr;
use pathfind_core::bellman_ford::BellmanFordSolver;
use pathfind_core::dijkstra::DijkstraSolver;

use csv_loader::CsvLoader;
use error::Error;
use labels::LabelTable;
use loader::EdgeListLoader;
use query::{CycleScan, RouteSearch};

/// Which query to run against the loaded graph.
enum QueryMode {
    Cycles,
    Route,
}

/// Everything parse_args extracts from the command line.
struct Invocation {
    mode: QueryMode,
    graph_path: String,
    start: Option<String>,
    goal: Option<String>,
}

fn main() {
    let invocation = parse_args();
    let config = config::load_config().expect("Failed to load config");

    if let Err(e) = run(invocation, &config) {
        eprintln!("pathfinder: {}", e);
        process::exit(1);
    }
}

fn run(invocation: Invocation, config: &config::Config) -> Result<(), Error> {
    let labels = LabelTable::new(&config.graph.labels)?;
    let graph = load_graph(&invocation.graph_path, &labels, config.graph.directed)?;

    let start = invocation
        .start
        .unwrap_or_else(|| config.query.start.clone());

    let lines = match invocation.mode {
        QueryMode::Cycles => CycleScan::new(BellmanFordSolver).run(&graph, &labels, &start)?,
        QueryMode::Route => {
            let goal = invocation.goal.unwrap_or_else(|| config.query.goal.clone());
            RouteSearch::new(DijkstraSolver).run(&graph, &labels, &start, &goal)?
        }
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

/// Picks the loader by file extension; everything that is not CSV is treated
/// as the whitespace edge-list format.
fn load_graph(path: &str, labels: &LabelTable, directed: bool) -> Result<GraphCsr, Error> {
    if path.ends_with(".csv") {
        println!("Loading CSV graph from {}...", path);
        CsvLoader::new(path.to_string(), directed).load(labels)
    } else {
        println!("Loading edge-list graph from {}...", path);
        EdgeListLoader::new(path.to_string(), directed).load(labels)
    }
}

/// Parse command-line arguments to determine the query mode and input file
fn parse_args() -> Invocation {
    let args: Vec<String> = env::args().collect();

    let mode = match args.get(1).map(|s| s.to_lowercase()).as_deref() {
        Some("cycles") => QueryMode::Cycles,
        Some("route") => QueryMode::Route,
        _ => usage_and_exit(&args),
    };

    let graph_path = match args.get(2) {
        Some(path) => path.clone(),
        None => usage_and_exit(&args),
    };

    Invocation {
        mode,
        graph_path,
        start: args.get(3).cloned(),
        goal: args.get(4).cloned(),
    }
}

fn usage_and_exit(args: &[String]) -> ! {
    eprintln!(
        "Usage: {} <cycles|route> <graph-file> [start [goal]]\n  - cycles: scan for a negative cycle reachable from the start node\n  - route: shortest path from start to goal",
        args.first().map(String::as_str).unwrap_or("pathfinder")
    );
    process::exit(1);
}
