//! File conversion pipeline
//!
//! Runs one conversion end to end: reads the input file through
//! `InputReader`, resolves the request with `CurrencyConverter`, and writes
//! the integer result to the given writer.
//!
//! Every failure is fatal to the request and is returned to the caller, which
//! owns rendering and the process exit code.

use crate::core::{Conversion, ConverterConfig, CurrencyConverter};
use crate::io::InputReader;
use crate::types::{ConversionError, RateLine};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Convert the request of one input file
///
/// # Errors
///
/// Returns the first input, parse, or resolution error encountered. With
/// `strict_count`, a declared rate count that differs from the number of rate
/// lines is a `MalformedCountLine` error.
pub fn convert_file(path: &Path, config: &ConverterConfig) -> Result<Conversion, ConversionError> {
    let reader = InputReader::open(path)?;
    let request = reader.request().clone();
    let declared_count = reader.declared_count();

    let rate_lines: Vec<RateLine> = reader.collect::<Result<_, _>>()?;
    debug!(
        path = %path.display(),
        declared = declared_count,
        read = rate_lines.len(),
        "read rate lines"
    );

    if rate_lines.len() != declared_count {
        if config.strict_count {
            return Err(ConversionError::malformed_count(
                1,
                format!(
                    "Declared {} exchange rates but found {}",
                    declared_count,
                    rate_lines.len()
                ),
            ));
        }
        debug!(
            declared = declared_count,
            read = rate_lines.len(),
            "declared rate count differs from rate lines"
        );
    }

    let conversion = CurrencyConverter::new(*config).convert(&request, &rate_lines)?;
    info!(
        source = %request.source,
        target = %request.target,
        amount = request.amount,
        converted = conversion.amount,
        "conversion complete"
    );

    Ok(conversion)
}

/// Convert one input file and write the result to `output`
///
/// Returns the converted amount that was written.
pub fn run(
    path: &Path,
    config: &ConverterConfig,
    output: &mut dyn Write,
) -> Result<u64, ConversionError> {
    let conversion = convert_file(path, config)?;
    writeln!(output, "{}", conversion.amount)?;
    Ok(conversion.amount)
}
