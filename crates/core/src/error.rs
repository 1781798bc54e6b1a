//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. File and
/// encoding problems belong to the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The named item is not held in the inventory.
    #[error("Item '{0}' does not exist in inventory.")]
    NotFound(String),

    /// Loosely typed input did not have the expected shape.
    #[error("{field} must be {expected}, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl DomainError {
    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn type_mismatch(
        field: &'static str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            found: found.into(),
        }
    }
}
