use serde_json::Value;

use super::breed::Breed;
use super::entity::Dog;
use crate::domain::{DomainResult, ValidationError};

/// Shortest accepted name, in characters
pub const NAME_MIN_LEN: usize = 1;

/// Longest accepted name, in characters
pub const NAME_MAX_LEN: usize = 25;

pub const DEFAULT_NAME: &str = "Fido";

pub const DEFAULT_BREED: Breed = Breed::Mastiff;

/// Validates all Dog invariants
pub fn validate_dog(dog: &Dog) -> DomainResult<()> {
    validate_name(dog.name())?;
    validate_breed(dog.breed().as_str())?;
    Ok(())
}

/// Name must be between 1 and 25 characters (Unicode scalar values, not bytes)
pub fn validate_name(name: &str) -> DomainResult<()> {
    let length = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&length) {
        return Err(ValidationError::NameLength { length });
    }
    Ok(())
}

/// Untyped name input must be text before the length rule applies
pub fn validate_name_value(value: &Value) -> DomainResult<&str> {
    match value {
        Value::String(name) => {
            validate_name(name)?;
            Ok(name.as_str())
        }
        other => Err(ValidationError::NameNotText {
            found: json_kind(other).to_string(),
        }),
    }
}

/// Breed must be one of the approved breeds
pub fn validate_breed(breed: &str) -> DomainResult<Breed> {
    breed.parse()
}

/// Untyped breed input; anything other than approved text is rejected
pub fn validate_breed_value(value: &Value) -> DomainResult<Breed> {
    match value {
        Value::String(breed) => validate_breed(breed),
        other => Err(ValidationError::UnapprovedBreed(other.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Invariants that must hold true for a Dog:
///
/// 1. Name is text of 1 to 25 characters
/// 2. Breed is a member of the approved set
/// 3. A rejected write leaves the previous value in place

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_bounds() {
        assert!(validate_name("A").is_ok());
        assert!(validate_name(&"a".repeat(25)).is_ok());
        assert_eq!(
            validate_name(""),
            Err(ValidationError::NameLength { length: 0 })
        );
        assert_eq!(
            validate_name(&"a".repeat(26)),
            Err(ValidationError::NameLength { length: 26 })
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 25 characters, 50 bytes
        let name = "é".repeat(25);
        assert_eq!(name.len(), 50);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn test_name_value_rejects_non_text() {
        assert_eq!(
            validate_name_value(&json!(7)),
            Err(ValidationError::NameNotText {
                found: "number".to_string()
            })
        );
        assert!(validate_name_value(&json!(null)).is_err());
        assert!(validate_name_value(&json!(["Fido"])).is_err());
        assert_eq!(validate_name_value(&json!("Rex")), Ok("Rex"));
    }

    #[test]
    fn test_breed_value() {
        assert_eq!(validate_breed_value(&json!("Pug")), Ok(Breed::Pug));
        assert_eq!(
            validate_breed_value(&json!(3)),
            Err(ValidationError::UnapprovedBreed("3".to_string()))
        );
        assert!(validate_breed("Poodle").is_err());
    }

    #[test]
    fn test_default_dog_is_valid() {
        assert!(validate_dog(&Dog::default()).is_ok());
    }
}
