//! Person entity - the record owned by the persons table.

use crate::PersonCreate;

use serde::{Deserialize, Serialize};

/// A stored person.
///
/// `id` is assigned by the repository on insert and never changes afterwards.
/// A person built from a [`PersonCreate`] carries an empty id until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub age: i64,
    /// Ordered, stored as a single delimited column
    pub hobbies: Vec<String>,
}

impl Person {
    pub fn new(id: String, name: String, age: i64, hobbies: Vec<String>) -> Self {
        Self {
            id,
            name,
            age,
            hobbies,
        }
    }

    /// True once the repository has assigned an identifier
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

impl From<PersonCreate> for Person {
    fn from(create: PersonCreate) -> Self {
        Self {
            id: String::new(),
            name: create.name,
            age: create.age,
            hobbies: create.hobbies,
        }
    }
}
