//! Currency code type
//!
//! Currency codes are opaque, case-sensitive tokens. Equality is exact string
//! equality and no normalization is performed ("eur" and "EUR" are distinct).

use std::borrow::Borrow;
use std::fmt;

/// Currency code such as `EUR` or `JPY`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        CurrencyCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        CurrencyCode(code.to_string())
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        CurrencyCode(code)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Allows HashMap<CurrencyCode, _> lookups by &str
impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
