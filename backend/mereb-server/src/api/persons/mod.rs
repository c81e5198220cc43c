pub mod create_person_request;
pub mod person_dto;
#[allow(clippy::module_inception)]
pub mod persons;
pub mod update_person_request;
