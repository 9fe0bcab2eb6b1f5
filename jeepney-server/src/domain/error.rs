//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from catalog I/O errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route fails a structural requirement (name, color, coordinate count)
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),
}
