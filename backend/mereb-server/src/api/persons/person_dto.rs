use mereb_core::Person;

use serde::Serialize;

/// Person DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct PersonDto {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub hobbies: Vec<String>,
}

impl From<Person> for PersonDto {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            name: p.name,
            age: p.age,
            hobbies: p.hobbies,
        }
    }
}

impl PersonDto {
    /// Order-preserving; an empty input gives an empty list, never null.
    pub fn from_list(persons: Vec<Person>) -> Vec<PersonDto> {
        persons.into_iter().map(PersonDto::from).collect()
    }
}
