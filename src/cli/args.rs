//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Binary tree traversal and aggregation toolkit
#[derive(Parser, Debug)]
#[command(name = "treewalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (-d, -dd, -ddd for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full demonstration sequence on the sample trees
    Demo,

    /// Print the labelled sample tree in traversal order
    Traverse {
        /// Traversal mechanism
        #[arg(short, long, value_enum, default_value = "stack")]
        order: Traversal,
    },

    /// Check whether a value occurs in a sample tree
    Search {
        /// Value to look for (one character, or an integer with --numeric)
        target: String,

        /// Search the numeric sample tree instead of the labelled one
        #[arg(short, long)]
        numeric: bool,

        /// Use the recursive depth-first search instead of breadth-first
        #[arg(short, long)]
        recursive: bool,
    },

    /// Sum all values of the numeric sample tree
    Sum {
        /// Aggregation mechanism
        #[arg(short, long, value_enum, default_value = "recursive")]
        algorithm: SumAlgorithm,
    },

    /// Minimum value of the numeric sample tree
    Min {
        /// Traversal mechanism
        #[arg(short, long, value_enum, default_value = "recursive")]
        algorithm: MinAlgorithm,
    },

    /// Maximum root-to-leaf path sum of the numeric sample tree
    MaxPathSum,

    /// List leaf values of the labelled sample tree
    Leaves,

    /// Show all root-to-leaf paths of the labelled sample tree
    Paths,

    /// Show the labelled sample tree structure
    Tree,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Traversal {
    /// Depth-first, explicit stack
    Stack,
    /// Depth-first, recursive
    Recursive,
    /// Breadth-first, queue
    BreadthFirst,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SumAlgorithm {
    Recursive,
    BreadthFirst,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MinAlgorithm {
    Stack,
    Queue,
    Recursive,
}
