use crate::core::{ConverterConfig, TraversalOrder};
use clap::Parser;
use std::path::PathBuf;

/// Convert an amount between currencies using a table of exchange rates
#[derive(Parser, Debug)]
#[command(name = "currency-converter")]
#[command(about = "Convert an amount between currencies using a table of exchange rates", long_about = None)]
pub struct CliArgs {
    /// Input file path containing the request and the exchange rates
    #[arg(value_name = "INPUT", help = "Path to the input file")]
    pub input_file: PathBuf,

    /// Traversal order used to find a conversion path
    #[arg(
        long = "order",
        value_name = "ORDER",
        default_value = "dfs",
        help = "Path search order: 'dfs' for depth-first or 'bfs' for breadth-first"
    )]
    pub order: TraversalOrder,

    /// Reject inputs whose declared rate count does not match the rate lines
    #[arg(long = "strict-count")]
    pub strict_count: bool,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Create a ConverterConfig from CLI arguments
    pub fn to_config(&self) -> ConverterConfig {
        ConverterConfig::new(self.order, self.strict_count)
    }
}
