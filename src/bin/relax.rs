use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use relax::report::LabeledResults;
use relax::{all_pairs_checked, DirectedGraph, Report, WeightMatrix};

#[derive(Parser)]
#[command(name = "relax")]
#[command(about = "All-pairs shortest paths over a weight matrix (Bellman-Ford)", long_about = None)]
struct Cli {
    /// JSON file holding a square matrix; non-numeric cells mean "no edge"
    #[arg(short, long, default_value = "./input.json")]
    file: PathBuf,

    /// Column width of the rendered tables
    #[arg(short, long, default_value_t = 4)]
    padding: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also print the shortest path for every pair
    #[arg(long, default_value_t = false)]
    paths: bool,

    /// Fail instead of printing best-effort results when a negative cycle is reachable
    #[arg(long, default_value_t = false)]
    check_negative_cycles: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let matrix = WeightMatrix::from_path(&cli.file)
        .with_context(|| format!("Failed to load matrix from {}", cli.file.display()))?;
    let graph = matrix.to_labeled_graph().context("Failed to build graph")?;
    let results = solve(&graph, cli.check_negative_cycles)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "computed all-pairs shortest paths"
    );

    let report = Report::new(&matrix, &results);
    match cli.format {
        Format::Text => {
            println!("Input");
            println!("{}", report.render_input(cli.padding));
            println!("Output");
            println!("{}", report.render_distances(cli.padding));
            if cli.paths {
                println!("Paths");
                println!("{}", report.render_paths(cli.padding));
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn solve(graph: &DirectedGraph<String>, checked: bool) -> Result<LabeledResults<'_, f64>> {
    if checked {
        return all_pairs_checked(graph).context("Negative-cycle check failed");
    }

    #[cfg(feature = "parallel")]
    {
        Ok(relax::par_all_pairs(graph))
    }
    #[cfg(not(feature = "parallel"))]
    {
        Ok(relax::all_pairs(graph))
    }
}
