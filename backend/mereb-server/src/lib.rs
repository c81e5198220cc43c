pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod services;


pub use api::{
    envelope::{ErrorResponse, SuccessResponse},
    error::ApiError,
    error::Result as ApiResult,
    fallback::endpoint_not_found,
    persons::{
        create_person_request::CreatePersonRequest,
        person_dto::PersonDto,
        persons::{create_person, delete_person, get_person, list_persons, update_person},
        update_person_request::UpdatePersonRequest,
    },
};
pub use app_state::AppState;
pub use services::{
    error::{Result as ServiceResult, ServiceError},
    person_service::{PersonService, ValidatingPersonService},
};

pub use crate::routes::build_router;
