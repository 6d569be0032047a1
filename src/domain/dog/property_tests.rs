// src/domain/dog/property_tests.rs
//
// Property tests for Dog field writes
//
// INVARIANTS TESTED:
// - Any 1..=25 character name is accepted and read back unchanged
// - Empty or 26+ character names are rejected and the old name survives
// - Every approved breed is accepted and read back unchanged
// - Any other breed text is rejected and the old breed survives

use proptest::prelude::*;
use serde_json::Value;

use crate::domain::dog::{Breed, Dog, APPROVED_BREEDS};
use crate::domain::ValidationError;

fn breed_strategy() -> impl Strategy<Value = Breed> {
    prop::sample::select(Breed::ALL.to_vec())
}

fn non_text_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::from),
        prop::collection::vec("[a-z]{1,5}", 0..3).prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn prop_valid_name_is_stored(name in "\\PC{1,25}") {
        let mut dog = Dog::default();
        prop_assert!(dog.set_name(name.clone()).is_ok());
        prop_assert_eq!(dog.name(), name.as_str());
    }

    #[test]
    fn prop_overlong_name_keeps_previous(name in "\\PC{26,60}") {
        let mut dog = Dog::new("Rex", "Pug").unwrap();
        let err = dog.set_name(name.clone()).unwrap_err();
        prop_assert_eq!(err, ValidationError::NameLength { length: name.chars().count() });
        prop_assert_eq!(dog.name(), "Rex");
    }

    #[test]
    fn prop_non_text_name_keeps_previous(value in non_text_strategy()) {
        let mut dog = Dog::new("Rex", "Pug").unwrap();
        let err = dog.set_name_value(&value).unwrap_err();
        prop_assert!(
            matches!(err, ValidationError::NameNotText { .. }),
            "expected NameNotText, got {:?}",
            err
        );
        prop_assert_eq!(dog.name(), "Rex");
    }

    #[test]
    fn prop_approved_breed_is_stored(start in breed_strategy(), next in breed_strategy()) {
        let mut dog = Dog::with_breed("Rex", start).unwrap();
        prop_assert!(dog.set_breed(next.as_str()).is_ok());
        prop_assert_eq!(dog.breed(), next);
    }

    #[test]
    fn prop_unapproved_breed_keeps_previous(start in breed_strategy(), text in ".{0,30}") {
        prop_assume!(!APPROVED_BREEDS.contains(&text.as_str()));
        let mut dog = Dog::with_breed("Rex", start).unwrap();
        let err = dog.set_breed(&text).unwrap_err();
        prop_assert_eq!(err, ValidationError::UnapprovedBreed(text.clone()));
        prop_assert_eq!(dog.breed(), start);
    }
}

#[test]
fn empty_name_keeps_previous() {
    let mut dog = Dog::new("Rex", "Pug").unwrap();
    assert_eq!(
        dog.set_name(""),
        Err(ValidationError::NameLength { length: 0 })
    );
    assert_eq!(dog.name(), "Rex");
}
