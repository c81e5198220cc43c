pub mod envelope;
pub mod error;
pub mod fallback;
pub mod persons;
