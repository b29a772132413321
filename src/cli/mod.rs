// CLI module
// Command-line interface, argument parsing and logging setup

mod args;
mod logging;
mod report;

pub use args::CliArgs;
pub use logging::init_logging;
pub use report::report;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., missing input path, invalid order, or --help flag),
/// clap displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
