// src/domain/dog/breed.rs
//
// Approved Breeds
//
// The closed set of breeds a Dog may carry. Text outside this set never
// becomes a Breed, so a stored Breed is always an approved one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::ValidationError;

/// Text form of every approved breed, in registry order
pub const APPROVED_BREEDS: [&str; 8] = [
    "Mastiff",
    "Chihuahua",
    "Corgi",
    "Shar Pei",
    "Beagle",
    "French Bulldog",
    "Pug",
    "Pointer",
];

/// An approved dog breed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Breed {
    Mastiff,
    Chihuahua,
    Corgi,
    #[serde(rename = "Shar Pei")]
    SharPei,
    Beagle,
    #[serde(rename = "French Bulldog")]
    FrenchBulldog,
    Pug,
    Pointer,
}

impl Breed {
    /// All approved breeds, same order as `APPROVED_BREEDS`
    pub const ALL: [Breed; 8] = [
        Breed::Mastiff,
        Breed::Chihuahua,
        Breed::Corgi,
        Breed::SharPei,
        Breed::Beagle,
        Breed::FrenchBulldog,
        Breed::Pug,
        Breed::Pointer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Breed::Mastiff => "Mastiff",
            Breed::Chihuahua => "Chihuahua",
            Breed::Corgi => "Corgi",
            Breed::SharPei => "Shar Pei",
            Breed::Beagle => "Beagle",
            Breed::FrenchBulldog => "French Bulldog",
            Breed::Pug => "Pug",
            Breed::Pointer => "Pointer",
        }
    }

    /// Exact, case-sensitive lookup in the approved set
    pub fn lookup(value: &str) -> Option<Breed> {
        Breed::ALL.into_iter().find(|breed| breed.as_str() == value)
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breed {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breed::lookup(s).ok_or_else(|| ValidationError::UnapprovedBreed(s.to_string()))
    }
}

impl PartialEq<str> for Breed {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Breed {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
