//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `currency`: Currency code type
//! - `rate`: Rate edges, raw rate lines and conversion requests
//! - `error`: Error types for the converter

pub mod currency;
pub mod error;
pub mod rate;

pub use currency::CurrencyCode;
pub use error::ConversionError;
pub use rate::{ConversionRequest, Edge, RateLine, RATE_SCALE};
