//! Currency Converter CLI
//!
//! Converts an amount from one currency to another using the exchange rates
//! listed in an input file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- rates.txt
//! cargo run -- --order bfs rates.txt
//! cargo run -- --strict-count --verbose rates.txt
//! ```
//!
//! The converted amount, rounded up to a whole unit, is written to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed input, no conversion path, etc.)

use currency_converter::cli;
use currency_converter::pipeline;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.verbose);

    let config = args.to_config();
    let mut output = std::io::stdout();
    if let Err(e) = pipeline::run(&args.input_file, &config, &mut output) {
        tracing::error!(error = %e, "conversion failed");
        let _ = cli::report(&args.input_file, &e, &mut std::io::stderr());
        process::exit(1);
    }
}
