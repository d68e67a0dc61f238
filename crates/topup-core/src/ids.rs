//! Identifier types for the storefront.
//!
//! Invoice IDs are client-generated order identifiers: the literal prefix
//! `DS` followed by the last ten digits of the Unix timestamp in
//! milliseconds at checkout. They are not checked for collisions before
//! insert; a duplicate surfaces as a database error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix carried by every storefront invoice ID.
pub const INVOICE_PREFIX: &str = "DS";

/// Number of timestamp digits in a generated invoice ID.
pub const INVOICE_SUFFIX_DIGITS: usize = 10;

/// A storefront invoice identifier.
///
/// Wraps the raw string form (`DS` + 10-digit millisecond suffix). Parsing
/// only rejects empty input; the server otherwise trusts the client-supplied
/// value verbatim.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvoiceId(String);

impl InvoiceId {
    /// Generate a new invoice ID from the current wall clock.
    #[must_use]
    pub fn generate() -> Self {
        Self::from_timestamp_millis(chrono::Utc::now().timestamp_millis())
    }

    /// Build an invoice ID from a millisecond timestamp.
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> Self {
        let digits = millis.unsigned_abs().to_string();
        let suffix = if digits.len() > INVOICE_SUFFIX_DIGITS {
            digits[digits.len() - INVOICE_SUFFIX_DIGITS..].to_string()
        } else {
            digits
        };
        Self(format!("{INVOICE_PREFIX}{suffix}"))
    }

    /// Return the raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for InvoiceId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Debug for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvoiceId({})", self.0)
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for InvoiceId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InvoiceId> for String {
    fn from(id: InvoiceId) -> Self {
        id.0
    }
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input was empty or whitespace-only.
    #[error("invoice id must not be empty")]
    Empty,
}
