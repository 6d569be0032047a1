// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod dog;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use dog::{
    validate_breed, validate_dog, validate_name, Breed, Dog, APPROVED_BREEDS, DEFAULT_BREED,
    DEFAULT_NAME, NAME_MAX_LEN, NAME_MIN_LEN,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Raised when a field value violates its constraint.
/// A failed validation never leaves a partially updated record behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be string between 1 and 25 characters (got {found})")]
    NameNotText { found: String },

    #[error("Name must be string between 1 and 25 characters (got {length} characters)")]
    NameLength { length: usize },

    #[error("Breed must be in list of approved breeds (got {0:?})")]
    UnapprovedBreed(String),
}

impl ValidationError {
    /// Name of the field whose constraint was violated
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameNotText { .. } | ValidationError::NameLength { .. } => "name",
            ValidationError::UnapprovedBreed(_) => "breed",
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, ValidationError>;
