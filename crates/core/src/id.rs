//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Identifier of an account.
///
/// Opaque to the domain: any non-blank string is accepted (`"SAV123"`,
/// `"CUR-0001"`, a UUID, ...). Surrounding whitespace is stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Create an account number from caller-supplied text.
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("AccountNumber: must not be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Generate a fresh account number.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing numbers explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for AccountNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for AccountNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountNumber> for String {
    fn from(value: AccountNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let number = AccountNumber::new("  SAV123 ").unwrap();
        assert_eq!(number.as_str(), "SAV123");
        assert_eq!(number.to_string(), "SAV123");
    }

    #[test]
    fn blank_numbers_are_rejected() {
        for input in ["", "   ", "\t\n"] {
            match input.parse::<AccountNumber>() {
                Err(DomainError::InvalidId(msg)) => assert!(msg.contains("AccountNumber")),
                other => panic!("expected InvalidId for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn generated_numbers_are_distinct() {
        let a = AccountNumber::generate();
        let b = AccountNumber::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn serializes_as_plain_string() {
        let number = AccountNumber::new("CUR456").unwrap();
        assert_eq!(serde_json::to_string(&number).unwrap(), "\"CUR456\"");
    }

    #[test]
    fn deserialization_validates() {
        let number: AccountNumber = serde_json::from_str("\" SAV1 \"").unwrap();
        assert_eq!(number.as_str(), "SAV1");
        assert!(serde_json::from_str::<AccountNumber>("\"  \"").is_err());
    }
}
