// Error rendering for the command line

use crate::types::ConversionError;
use std::io::{self, Write};
use std::path::Path;

/// Write the diagnostic for a failed conversion
///
/// Line-localized errors name the offending line and file, followed by the
/// message on its own line. Everything else is a single `Error:` line.
pub fn report(path: &Path, error: &ConversionError, output: &mut dyn Write) -> io::Result<()> {
    match error.line() {
        Some(line) => {
            writeln!(output, "Line {} of file `{}` invalid:", line, path.display())?;
            writeln!(output, "{}", error.message())
        }
        None => writeln!(output, "Error: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn render(error: ConversionError) -> String {
        let mut output = Vec::new();
        report(Path::new("rates.txt"), &error, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    #[case::request(
        ConversionError::malformed_request(0, "Amount must be greater than 0"),
        "Line 0 of file `rates.txt` invalid:\nAmount must be greater than 0\n"
    )]
    #[case::rate(
        ConversionError::malformed_rate(4, "Invalid exchange rate '1,5'"),
        "Line 4 of file `rates.txt` invalid:\nInvalid exchange rate '1,5'\n"
    )]
    fn test_line_errors_name_line_and_file(#[case] error: ConversionError, #[case] expected: &str) {
        assert_eq!(render(error), expected);
    }

    #[rstest]
    #[case::no_path(
        ConversionError::no_path("EUR", "JPY"),
        "Error: No conversion path from EUR to JPY\n"
    )]
    #[case::file_not_found(
        ConversionError::file_not_found("rates.txt"),
        "Error: File path `rates.txt` does not exist\n"
    )]
    #[case::zero_rate(
        ConversionError::zero_rate("VND", "EUR"),
        "Error: Exchange rate from VND to EUR rounds to 0\n"
    )]
    fn test_other_errors_are_single_line(#[case] error: ConversionError, #[case] expected: &str) {
        assert_eq!(render(error), expected);
    }
}
