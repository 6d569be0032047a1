// src/lib.rs
// Kennel - Dog record with validated name and breed
//
// Architecture:
// - Domain-centric: the Dog entity owns its invariants
// - Explicit: fields are private, every write is validated before commit
// - Application Layer: untyped (JSON) boundary over the domain

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_breed, validate_dog, validate_name, Breed, DomainResult, Dog, ValidationError,
    APPROVED_BREEDS, DEFAULT_BREED, DEFAULT_NAME, NAME_MAX_LEN, NAME_MIN_LEN,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::dto::{
    create_dog, parse_dog, to_json, update_dog, CreateDogDto, DogDto, UpdateDogDto,
};
pub use application::{ErrorResponse, ErrorType, ToErrorResponse};
