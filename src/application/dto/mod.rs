// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are simple, serializable structs
// - Incoming DTOs carry untyped values; only the domain decides validity
// - Updates are all-or-nothing

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Dog, DEFAULT_BREED, DEFAULT_NAME};
use crate::error::AppResult;

// ============================================================================
// DOG DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogDto {
    pub name: String,
    pub breed: String,
}

impl From<&Dog> for DogDto {
    fn from(dog: &Dog) -> Self {
        Self {
            name: dog.name().to_string(),
            breed: dog.breed().as_str().to_string(),
        }
    }
}

/// Omitted fields take the defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDogDto {
    #[serde(default = "default_name")]
    pub name: Value,
    #[serde(default = "default_breed")]
    pub breed: Value,
}

impl Default for CreateDogDto {
    fn default() -> Self {
        Self {
            name: default_name(),
            breed: default_breed(),
        }
    }
}

/// Only the present fields are written
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDogDto {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub breed: Option<Value>,
}

fn default_name() -> Value {
    Value::String(DEFAULT_NAME.to_string())
}

fn default_breed() -> Value {
    Value::String(DEFAULT_BREED.as_str().to_string())
}

// ============================================================================
// CONVERSIONS
// ============================================================================

pub fn create_dog(dto: &CreateDogDto) -> AppResult<Dog> {
    Ok(Dog::from_values(&dto.name, &dto.breed)?)
}

/// Decode and validate a dog from JSON text.
/// Malformed JSON is a serialization error; a bad field is a validation error.
pub fn parse_dog(json: &str) -> AppResult<Dog> {
    let dto: CreateDogDto = serde_json::from_str(json)?;
    create_dog(&dto)
}

/// Apply an update to `dog`. If any field is rejected, no field changes.
pub fn update_dog(dog: &mut Dog, dto: &UpdateDogDto) -> AppResult<()> {
    let mut next = dog.clone();
    if let Some(name) = &dto.name {
        next.set_name_value(name)?;
    }
    if let Some(breed) = &dto.breed {
        next.set_breed_value(breed)?;
    }
    *dog = next;
    Ok(())
}

pub fn to_json(dog: &Dog) -> AppResult<String> {
    Ok(serde_json::to_string(&DogDto::from(dog))?)
}
