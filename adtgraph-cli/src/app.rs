use std::path::PathBuf;

use adtgraph::CycleStrategy;
use clap::{Parser, Subcommand};

/// adtgraph - traverse, sort and check directed graphs stored as edge lists
#[derive(Debug, Parser)]
#[command(name = "adtgraph", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display graph overview: vertex and edge counts, sources, and whether it is cyclic.
    Info {
        /// Edge-list file, or '-' for stdin.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Also list the in- and out-degree of every vertex.
        #[arg(long)]
        degrees: bool,
    },

    /// Print the depth-first pre-order of the whole graph.
    Dfs {
        /// Edge-list file, or '-' for stdin.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Only visit the vertices reachable from this vertex.
        #[arg(long, value_name = "VERTEX")]
        from: Option<usize>,
    },

    /// Print the breadth-first order from a vertex.
    Bfs {
        /// Edge-list file, or '-' for stdin.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Vertex to start from.
        #[arg(long, value_name = "VERTEX")]
        from: usize,
    },

    /// Print a topological order; fails with a witness cycle if there is none.
    Topo {
        /// Edge-list file, or '-' for stdin.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Run the cycle detectors and report their verdicts.
    Cycles {
        /// Edge-list file, or '-' for stdin.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Run only one detector: dfs, bfs, or kahn. Runs all three by default,
        /// except bfs on graphs above 10000 vertices: it costs O(V·(V+E)).
        #[arg(short, long)]
        strategy: Option<CycleStrategy>,
    },

    /// Render the graph in Graphviz DOT format.
    Dot {
        /// Edge-list file, or '-' for stdin.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Graph name used as DOT identifier and label.
        #[arg(short, long)]
        name: Option<String>,
    },
}
