use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use shortest_paths::{parse_graph, Error, GraphFormat, LabeledGraph, NodeId, Report, Result, ShortestPaths, Weight};

/// Shortest paths over a sidewalk or edge-list graph
#[derive(Parser, Debug)]
#[command(name = "shortest_paths", version, about)]
struct Cli {
    /// Graph file type: "basic" or "db"
    format: String,

    /// Graph file to read
    file: PathBuf,

    /// Label of the origin node
    origin: String,

    /// Label of the destination node; without it every reachable node is listed
    destination: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn lookup(graph: &LabeledGraph<Weight>, label: &str) -> Result<NodeId> {
    graph
        .node(label)
        .ok_or_else(|| Error::UnknownNode(label.to_string()))
}

fn run(cli: &Cli) -> Result<String> {
    let format: GraphFormat = cli.format.parse()?;
    let graph = parse_graph(format, &cli.file)?;

    let origin = lookup(&graph, &cli.origin)?;
    let destination = cli
        .destination
        .as_deref()
        .map(|label| lookup(&graph, label))
        .transpose()?;

    let mut engine: ShortestPaths<Weight, _> = ShortestPaths::new(&graph);
    let result = engine.compute(origin)?;
    info!(
        "{} of {} nodes reachable from {}",
        result.reachable_count(),
        graph.nodes().count(),
        cli.origin
    );

    let report = Report::build(&graph, result, destination);
    if cli.json {
        report.to_json()
    } else {
        Ok(report.to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
