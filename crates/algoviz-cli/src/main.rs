//! Algoviz CLI - drive the Algoviz engine from a terminal.
//!
//! Each command builds a session, runs one algorithm and prints the result as
//! a table or as JSON. It is meant for checking algorithm behavior and timing
//! without a graphical front end.

mod commands;
mod output;

use algoviz_algorithms::graph::PathAlgorithm;
use algoviz_algorithms::tree::Traversal;
use algoviz_common::ValueType;
use algoviz_core::SortAlgorithm;
use clap::{Parser, Subcommand, ValueEnum};

/// Algoviz data structure and algorithm explorer.
///
/// Sorts, benchmarks, builds trees and queries graphs using the Algoviz
/// engine.
#[derive(Parser)]
#[command(name = "algoviz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Seed for random generation
    #[arg(long, global = true)]
    seed: Option<u64>,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Element kinds accepted on the command line.
#[derive(Clone, Copy, ValueEnum, Default)]
enum Kind {
    /// 32-bit integers
    #[default]
    Int,
    /// 32-bit floats
    Float,
    /// Single characters
    Char,
    /// Words
    Text,
}

impl From<Kind> for ValueType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Int => ValueType::Integer,
            Kind::Float => ValueType::Float,
            Kind::Char => ValueType::Character,
            Kind::Text => ValueType::Text,
        }
    }
}

/// Container a sort or benchmark works on.
#[derive(Clone, Copy, ValueEnum, Default)]
enum Container {
    /// Contiguous array
    #[default]
    Array,
    /// Linked list
    List,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Sort an array or linked list
    Sort {
        /// Sort algorithm (bubble, insertion, shell, quick)
        #[arg(short, long, default_value = "quick", value_parser = parse_sort)]
        algorithm: SortAlgorithm,

        /// Element kind
        #[arg(short = 't', long = "type", default_value = "int")]
        kind: Kind,

        /// Whitespace-separated values; random values are used when absent
        #[arg(long)]
        values: Option<String>,

        /// Number of random values
        #[arg(long, default_value_t = 20)]
        size: usize,

        /// Container to sort
        #[arg(long, default_value = "array")]
        container: Container,

        /// Link the list in both directions
        #[arg(long)]
        doubly: bool,

        /// Print every comparison, swap and shift
        #[arg(long)]
        steps: bool,
    },

    /// Time every sort algorithm across a range of sizes
    Bench {
        /// Largest size to sample (clamped to 100..=15000)
        #[arg(long, default_value_t = 1000)]
        max_size: usize,

        /// Element kind
        #[arg(short = 't', long = "type", default_value = "int")]
        kind: Kind,

        /// Container to sort
        #[arg(long, default_value = "array")]
        container: Container,
    },

    /// Build a tree and walk it
    Tree {
        /// Element kind
        #[arg(short = 't', long = "type", default_value = "int")]
        kind: Kind,

        /// Whitespace-separated values inserted in order; random values are
        /// used when absent
        #[arg(long)]
        values: Option<String>,

        /// Number of random values
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// Build an N-ary tree with this maximum degree instead of a BST
        #[arg(long)]
        nary: Option<usize>,

        /// Visiting order (bfs, pre, in, post)
        #[arg(short, long, default_value = "in", value_parser = parse_traversal)]
        order: Traversal,

        /// Rebuild as a balanced BST before walking
        #[arg(long)]
        rebalance: bool,

        /// Convert an N-ary tree to binary form before walking
        #[arg(long)]
        convert: bool,

        /// Delete the subtree rooted at the node rendering as this text
        #[arg(long)]
        delete: Option<String>,
    },

    /// Build a graph and find paths between two nodes
    Graph {
        /// Shortest path algorithm (dijkstra, bellman-ford, floyd-warshall)
        #[arg(short, long, default_value = "dijkstra", value_parser = parse_path)]
        algorithm: PathAlgorithm,

        /// Node label kind
        #[arg(short = 't', long = "type", default_value = "char")]
        kind: Kind,

        /// Whitespace-separated node labels; a random graph is generated when
        /// absent
        #[arg(long)]
        nodes: Option<String>,

        /// Edge as FROM:TO:WEIGHT, may be repeated
        #[arg(long = "edge")]
        edges: Vec<String>,

        /// Add edges in both directions
        #[arg(long)]
        undirected: bool,

        /// Source node label; defaults to the first node
        #[arg(long)]
        from: Option<String>,

        /// Destination node label; defaults to the last node
        #[arg(long)]
        to: Option<String>,
    },
}

fn parse_sort(name: &str) -> Result<SortAlgorithm, String> {
    SortAlgorithm::from_name(name).ok_or_else(|| format!("unknown sort algorithm '{name}'"))
}

fn parse_traversal(name: &str) -> Result<Traversal, String> {
    Traversal::from_name(name).ok_or_else(|| format!("unknown traversal '{name}'"))
}

fn parse_path(name: &str) -> Result<PathAlgorithm, String> {
    PathAlgorithm::from_name(name).ok_or_else(|| format!("unknown path algorithm '{name}'"))
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let result = match cli.command {
        Commands::Sort {
            algorithm,
            kind,
            values,
            size,
            container,
            doubly,
            steps,
        } => commands::sort::run(
            &commands::sort::SortArgs {
                algorithm,
                value_type: kind.into(),
                values,
                size,
                list: matches!(container, Container::List),
                doubly,
                steps,
            },
            cli.seed,
            cli.format,
            cli.quiet,
        ),
        Commands::Bench {
            max_size,
            kind,
            container,
        } => commands::bench::run(
            max_size,
            kind.into(),
            matches!(container, Container::List),
            cli.seed,
            cli.format,
            cli.quiet,
        ),
        Commands::Tree {
            kind,
            values,
            count,
            nary,
            order,
            rebalance,
            convert,
            delete,
        } => commands::tree::run(
            &commands::tree::TreeArgs {
                value_type: kind.into(),
                values,
                count,
                nary,
                order,
                rebalance,
                convert,
                delete,
            },
            cli.seed,
            cli.format,
            cli.quiet,
        ),
        Commands::Graph {
            algorithm,
            kind,
            nodes,
            edges,
            undirected,
            from,
            to,
        } => commands::graph::run(
            &commands::graph::GraphArgs {
                algorithm,
                value_type: kind.into(),
                nodes,
                edges,
                directed: !undirected,
                from,
                to,
            },
            cli.seed,
            cli.format,
            cli.quiet,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
