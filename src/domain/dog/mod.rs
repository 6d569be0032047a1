pub mod breed;
pub mod entity;
pub mod invariants;

#[cfg(test)]
mod property_tests;

pub use breed::{Breed, APPROVED_BREEDS};
pub use entity::Dog;
pub use invariants::{
    validate_breed, validate_dog, validate_name, DEFAULT_BREED, DEFAULT_NAME, NAME_MAX_LEN,
    NAME_MIN_LEN,
};
