//! I/O module
//!
//! Handles reading the conversion input.
//!
//! # Components
//!
//! - `input_format` - Line format handling (record conversion, format messages)
//! - `reader` - Input file reader with iterator interface over rate lines

pub mod input_format;
pub mod reader;

pub use input_format::{parse_count, parse_rate_line, parse_request};
pub use reader::InputReader;
