pub mod error;
pub mod hobbies;
pub mod pool;
pub mod repositories;


pub use error::{DbError, Result};
pub use hobbies::{HOBBY_SEPARATOR, join_hobbies, split_hobbies};
pub use pool::{connect, connect_in_memory, run_migrations};
pub use repositories::person_repository::{PersonRepository, SqlitePersonRepository};
