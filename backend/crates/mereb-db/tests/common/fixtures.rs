#![allow(dead_code)]

use mereb_core::Person;

/// Creates an unsaved Person with sensible defaults
pub fn create_test_person() -> Person {
    create_test_person_named("Ana")
}

pub fn create_test_person_named(name: &str) -> Person {
    Person {
        id: String::new(),
        name: name.to_string(),
        age: 30,
        hobbies: vec!["reading".to_string(), "chess".to_string()],
    }
}
