//! CLI entry point for the `gkit` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphkit::cli::commands::{self, MatrixKind};
use graphkit::GraphError;

#[derive(Parser)]
#[command(
    name = "gkit",
    about = "graphkit CLI: matrices, DFS, Dijkstra and Eulerian walks over edge-list files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex and edge counts and the adjacency lists
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Print the adjacency or incidence matrix
    Matrix {
        /// Path to the edge-list file
        file: PathBuf,
        /// Matrix kind: adjacency or incidence
        #[arg(long, default_value = "adjacency")]
        kind: String,
    },
    /// Out-degrees, chromatic number and edge chromatic number
    Degrees {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Depth-first search from a vertex
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex (1-based)
        #[arg(long, default_value = "1")]
        start: usize,
    },
    /// Shortest distances from a vertex
    Dijkstra {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex (1-based)
        #[arg(long, default_value = "1")]
        source: usize,
    },
    /// Enumerate Eulerian circuits and paths, one per start vertex
    Euler {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Run every analysis on one graph
    Report {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex for DFS and Dijkstra (1-based)
        #[arg(long, default_value = "1")]
        start: usize,
    },
    /// Reports for the built-in sample graphs
    Demo,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Matrix { file, kind } => {
            let mk = match MatrixKind::from_name(&kind) {
                Some(mk) => mk,
                None => {
                    eprintln!("Invalid matrix kind: {}", kind);
                    process::exit(3);
                }
            };
            commands::cmd_matrix(&file, mk, json)
        }
        Commands::Degrees { file } => commands::cmd_degrees(&file, json),
        Commands::Dfs { file, start } => commands::cmd_dfs(&file, start, json),
        Commands::Dijkstra { file, source } => commands::cmd_dijkstra(&file, source, json),
        Commands::Euler { file } => commands::cmd_euler(&file, json),
        Commands::Report { file, start } => commands::cmd_report(&file, start, json),
        Commands::Demo => commands::cmd_demo(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::InvalidArgument(_) => 3,
            GraphError::IndexOutOfRange { .. } => 4,
        };
        process::exit(code);
    }
}
