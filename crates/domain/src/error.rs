//! Unified error types for the domain layer
//!
//! Every fallible domain operation returns [`DomainError`], so the runner can
//! wrap it with context instead of matching on strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No faction is registered under this numeric id
    #[error("Unknown faction id: {0}")]
    UnknownFaction(i32),

    /// No unit role is registered under this numeric id
    #[error("Unknown unit type id: {0}")]
    UnknownUnitRole(i32),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation failed (e.g., a registry has no factory for a faction)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create an unknown faction error
    pub fn unknown_faction(id: i32) -> Self {
        Self::UnknownFaction(id)
    }

    /// Create an unknown unit role error
    pub fn unknown_unit_role(id: i32) -> Self {
        Self::UnknownUnitRole(id)
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Faction {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "england" => Ok(Self::England),
    ///             _ => Err(DomainError::parse(format!("Unknown faction: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
