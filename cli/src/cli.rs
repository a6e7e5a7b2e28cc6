use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Level of verbosity
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the bundled programs
    List,
    /// Print a bundled program
    Show {
        /// Name of the program
        #[arg(value_name = "PROGRAM")]
        name: String,
        /// Line width for the layout
        #[arg(short, long, default_value_t = 80)]
        width: usize,
    },
    /// Run a bundled program
    Run {
        /// Name of the program
        #[arg(value_name = "PROGRAM")]
        name: String,
        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print every intermediate state
        #[arg(short, long, default_value_t = false)]
        trace: bool,
        /// Give up after this many steps
        #[arg(short, long, conflicts_with = "unbounded")]
        limit: Option<usize>,
        /// Never give up; a program that loops forever hangs
        #[arg(long, default_value_t = false)]
        unbounded: bool,
    },
    /// Run every bundled program and check its outcome
    Test {
        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
