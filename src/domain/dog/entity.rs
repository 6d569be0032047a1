use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::breed::Breed;
use super::invariants::{
    validate_breed, validate_breed_value, validate_name, validate_name_value, DEFAULT_BREED,
    DEFAULT_NAME,
};
use crate::domain::DomainResult;

/// A dog with a validated name and an approved breed.
///
/// Fields are private: every write goes through a setter that validates
/// before committing, so a `Dog` is never observable in an invalid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DogFields")]
pub struct Dog {
    name: String,
    breed: Breed,
}

/// Untyped wire form; becomes a `Dog` only through validation
#[derive(Debug, Deserialize)]
struct DogFields {
    #[serde(default = "default_name_value")]
    name: Value,
    #[serde(default = "default_breed_value")]
    breed: Value,
}

fn default_name_value() -> Value {
    Value::String(DEFAULT_NAME.to_string())
}

fn default_breed_value() -> Value {
    Value::String(DEFAULT_BREED.as_str().to_string())
}

impl Dog {
    /// Create a new Dog, validating both fields
    pub fn new(name: impl Into<String>, breed: &str) -> DomainResult<Self> {
        let breed = validate_breed(breed)?;
        Self::with_breed(name, breed)
    }

    /// Create a new Dog from an already approved breed
    pub fn with_breed(name: impl Into<String>, breed: Breed) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, breed })
    }

    /// Create a Dog with the default breed
    pub fn named(name: impl Into<String>) -> DomainResult<Self> {
        Self::with_breed(name, DEFAULT_BREED)
    }

    /// Create a Dog with the default name
    pub fn of_breed(breed: &str) -> DomainResult<Self> {
        Self::new(DEFAULT_NAME, breed)
    }

    /// Create a Dog from untyped values, e.g. decoded JSON
    pub fn from_values(name: &Value, breed: &Value) -> DomainResult<Self> {
        let name = validate_name_value(name)?.to_string();
        let breed = validate_breed_value(breed)?;
        Ok(Self { name, breed })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn breed(&self) -> Breed {
        self.breed
    }

    /// Replace the name; on error the current name is kept
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        if let Err(err) = validate_name(&name) {
            log::debug!("rejected name for {:?}: {}", self.name, err);
            return Err(err);
        }
        log::trace!("name {:?} -> {:?}", self.name, name);
        self.name = name;
        Ok(())
    }

    /// Replace the name from an untyped value; non-text is rejected
    pub fn set_name_value(&mut self, value: &Value) -> DomainResult<()> {
        match validate_name_value(value) {
            Ok(name) => {
                log::trace!("name {:?} -> {:?}", self.name, name);
                self.name = name.to_string();
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected name for {:?}: {}", self.name, err);
                Err(err)
            }
        }
    }

    /// Replace the breed; on error the current breed is kept
    pub fn set_breed(&mut self, breed: &str) -> DomainResult<()> {
        match validate_breed(breed) {
            Ok(breed) => {
                self.set_breed_kind(breed);
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected breed for {:?}: {}", self.name, err);
                Err(err)
            }
        }
    }

    /// Replace the breed from an untyped value; on error the current breed is kept
    pub fn set_breed_value(&mut self, value: &Value) -> DomainResult<()> {
        match validate_breed_value(value) {
            Ok(breed) => {
                self.set_breed_kind(breed);
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected breed for {:?}: {}", self.name, err);
                Err(err)
            }
        }
    }

    /// Replace the breed with an approved one
    pub fn set_breed_kind(&mut self, breed: Breed) {
        log::trace!("breed of {:?}: {} -> {}", self.name, self.breed, breed);
        self.breed = breed;
    }
}

impl Default for Dog {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            breed: DEFAULT_BREED,
        }
    }
}

impl TryFrom<DogFields> for Dog {
    type Error = crate::domain::ValidationError;

    fn try_from(fields: DogFields) -> Result<Self, Self::Error> {
        Dog::from_values(&fields.name, &fields.breed)
    }
}

impl std::fmt::Display for Dog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.breed)
    }
}
