pub mod person;
pub mod person_create;
