use crate::consensus::GroupingStrategy;
use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rankfuse")]
#[command(about = "Fuse two weak orders into a consensus ranking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .rankfuse.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: info, -vv: debug, -vvv: trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The two orders every fusion command reads
#[derive(Args, Debug, Clone)]
pub struct OrderPair {
    /// First order: inline JSON such as '[1,[2,3],4]', a file path, or '-' for stdin
    pub left: String,

    /// Second order, same forms as the first
    pub right: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconstruct the consensus weak order of two orders
    Fuse {
        #[command(flatten)]
        orders: OrderPair,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// How contradicted elements are grouped
        #[arg(short, long, value_enum)]
        grouping: Option<GroupingStrategy>,
    },

    /// Print the fused agreement matrix as a 0/1 array
    Core {
        #[command(flatten)]
        orders: OrderPair,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List element pairs the two orders rank in opposite directions
    Contradictions {
        #[command(flatten)]
        orders: OrderPair,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the dominance matrix of a single order
    Matrix {
        /// Order: inline JSON, a file path, or '-' for stdin
        order: String,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
