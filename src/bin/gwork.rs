//! CLI entry point for the `gwork` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphwork::cli::commands;
use graphwork::format::{Directedness, MatrixReader, ParseOptions};
use graphwork::structures::IndexMapping;
use graphwork::GraphError;

#[derive(Parser)]
#[command(
    name = "gwork",
    about = "gwork: graph algorithms over weighted-matrix files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Number matrix indices by ascending vertex id instead of list position
    #[arg(long, global = true)]
    ascending_index: bool,

    /// Treat the matrix as directed regardless of its lower triangle
    #[arg(long, global = true, conflicts_with = "undirected")]
    directed: bool,

    /// Treat the matrix as undirected regardless of its lower triangle
    #[arg(long, global = true)]
    undirected: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a matrix file
    Info {
        /// Path to the matrix file
        file: PathBuf,
    },
    /// Print adjacency matrix, incidence matrix and incidence table
    Structures {
        /// Path to the matrix file
        file: PathBuf,
    },
    /// Print the graph as GraphViz DOT
    Dot {
        /// Path to the matrix file
        file: PathBuf,
    },
    /// Breadth-first search from a vertex
    Bfs {
        /// Path to the matrix file
        file: PathBuf,
        /// Starting vertex id (1-based)
        start: u32,
    },
    /// Depth-first search from a vertex
    Dfs {
        /// Path to the matrix file
        file: PathBuf,
        /// Starting vertex id (1-based)
        start: u32,
    },
    /// Minimum spanning tree (Prim)
    Prim {
        /// Path to the matrix file
        file: PathBuf,
    },
    /// Shortest paths from a vertex (Dijkstra)
    Dijkstra {
        /// Path to the matrix file
        file: PathBuf,
        /// Source vertex id (1-based)
        start: u32,
    },
    /// Eulerian cycle
    Euler {
        /// Path to the matrix file
        file: PathBuf,
    },
    /// Topological sort of a directed graph
    Topo {
        /// Path to the matrix file
        file: PathBuf,
    },
    /// Check whether every vertex is reachable from the first
    Connected {
        /// Path to the matrix file
        file: PathBuf,
    },
    /// Re-write the graph as matrix text
    Export {
        /// Path to the matrix file
        file: PathBuf,
        /// Output path
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let reader = MatrixReader::with_options(ParseOptions {
        directedness: if cli.directed {
            Directedness::Directed
        } else if cli.undirected {
            Directedness::Undirected
        } else {
            Directedness::Detect
        },
        index_mapping: if cli.ascending_index {
            IndexMapping::AscendingId
        } else {
            IndexMapping::ListPosition
        },
        ..ParseOptions::default()
    });

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&reader, &file, json),
        Commands::Structures { file } => commands::cmd_structures(&reader, &file, json),
        Commands::Dot { file } => commands::cmd_dot(&reader, &file),
        Commands::Bfs { file, start } => commands::cmd_traverse(&reader, &file, start, true, json),
        Commands::Dfs { file, start } => commands::cmd_traverse(&reader, &file, start, false, json),
        Commands::Prim { file } => commands::cmd_prim(&reader, &file, json),
        Commands::Dijkstra { file, start } => commands::cmd_dijkstra(&reader, &file, start, json),
        Commands::Euler { file } => commands::cmd_euler(&reader, &file, json),
        Commands::Topo { file } => commands::cmd_topo(&reader, &file, json),
        Commands::Connected { file } => commands::cmd_connected(&reader, &file, json),
        Commands::Export { file, out } => commands::cmd_export(&reader, &file, &out),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::VertexNotFound(_) | GraphError::IndexOutOfRange { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
