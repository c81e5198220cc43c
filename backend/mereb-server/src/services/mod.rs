pub mod error;
pub mod person_service;
