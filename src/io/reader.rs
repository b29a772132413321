//! Input file reader with iterator interface
//!
//! Reads the request and count lines up front, then yields the rate lines one
//! at a time. Delegates line format concerns to the input_format module.
//!
//! ```no_run
//! use currency_converter::io::reader::InputReader;
//! use std::path::Path;
//!
//! let reader = InputReader::open(Path::new("rates.txt")).unwrap();
//! println!("{:?}", reader.request());
//! for line in reader {
//!     match line {
//!         Ok(line) => println!("{:?}", line),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Line Numbers
//!
//! Line numbers are 0-indexed and taken from the csv record positions, so a
//! blank request or count line is still reported against line 0 or line 1.
//! Blank lines among the rate lines are skipped. A line that is not valid
//! UTF-8 is reported as malformed at its own line.

use crate::io::input_format::{
    parse_count, parse_rate_line, parse_request, COUNT_FORMAT, REQUEST_FORMAT,
};
use crate::types::{ConversionError, ConversionRequest, RateLine};
use csv::{ByteRecord, Reader, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const REQUEST_LINE: usize = 0;
const COUNT_LINE: usize = 1;

/// Reader over one conversion input
#[derive(Debug)]
pub struct InputReader<R = File> {
    records: Reader<R>,
    request: ConversionRequest,
    declared_count: usize,
    next_line: usize,
}

impl InputReader<File> {
    /// Open an input file
    ///
    /// # Errors
    ///
    /// - `MissingArgument` if the path is empty
    /// - `FileNotFound` if nothing exists at the path
    /// - `Io` if the file cannot be opened
    /// - `MalformedRequestLine` / `MalformedCountLine` for invalid header lines
    pub fn open(path: &Path) -> Result<Self, ConversionError> {
        if path.as_os_str().is_empty() {
            return Err(ConversionError::MissingArgument);
        }
        if !path.exists() {
            return Err(ConversionError::file_not_found(&path.display().to_string()));
        }

        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read> InputReader<R> {
    /// Read the request and count lines from any reader
    pub fn from_reader(input: R) -> Result<Self, ConversionError> {
        let mut records = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(input);

        let request = match next_record(&mut records, REQUEST_LINE)? {
            Some((REQUEST_LINE, record)) => parse_request(REQUEST_LINE, &record)?,
            _ => return Err(ConversionError::malformed_request(REQUEST_LINE, REQUEST_FORMAT)),
        };

        let declared_count = match next_record(&mut records, COUNT_LINE)? {
            Some((COUNT_LINE, record)) => parse_count(COUNT_LINE, &record)?,
            _ => return Err(ConversionError::malformed_count(COUNT_LINE, COUNT_FORMAT)),
        };

        Ok(InputReader {
            records,
            request,
            declared_count,
            next_line: COUNT_LINE + 1,
        })
    }

    pub fn request(&self) -> &ConversionRequest {
        &self.request
    }

    /// Rate line count declared on line 1
    pub fn declared_count(&self) -> usize {
        self.declared_count
    }
}

/// Next record with its 0-indexed line number
fn next_record<R: Read>(
    records: &mut Reader<R>,
    fallback_line: usize,
) -> Result<Option<(usize, StringRecord)>, ConversionError> {
    let mut record = ByteRecord::new();
    if !records.read_byte_record(&mut record)? {
        return Ok(None);
    }

    let line = record
        .position()
        .map(|position| position.line().saturating_sub(1) as usize)
        .unwrap_or(fallback_line);
    let mut record = StringRecord::from_byte_record(record).map_err(|_| invalid_utf8(line))?;
    record.trim();
    Ok(Some((line, record)))
}

fn invalid_utf8(line: usize) -> ConversionError {
    let message = "Line is not valid UTF-8";
    match line {
        REQUEST_LINE => ConversionError::malformed_request(line, message),
        COUNT_LINE => ConversionError::malformed_count(line, message),
        _ => ConversionError::malformed_rate(line, message),
    }
}

impl<R: Read> Iterator for InputReader<R> {
    type Item = Result<RateLine, ConversionError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next_line = self.next_line;
        let result = match next_record(&mut self.records, next_line) {
            Ok(None) => return None,
            Ok(Some((line, record))) => {
                self.next_line = line + 1;
                parse_rate_line(line, &record)
            }
            Err(e) => Err(e),
        };
        Some(result)
    }
}
