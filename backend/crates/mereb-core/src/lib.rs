pub mod error;
pub mod models;
pub mod validation;


pub use error::{CoreError, Result};
pub use models::person::Person;
pub use models::person_create::PersonCreate;
pub use validation::validate_person_create;
