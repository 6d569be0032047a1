// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between untyped input (JSON) and the Dog domain
// - Every value crossing it goes through domain validation
// - Translates domain entities to DTOs and errors to responses

pub mod dto;
pub mod error_handling;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
