use serde::{Deserialize, Serialize};

/// Client-supplied fields for creating or fully replacing a person.
///
/// Unvalidated; run it through [`crate::validate_person_create`] before it
/// reaches storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCreate {
    pub name: String,
    pub age: i64,
    pub hobbies: Vec<String>,
}

impl PersonCreate {
    pub fn new(name: impl Into<String>, age: i64, hobbies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            age,
            hobbies,
        }
    }
}
