//! Person REST API handlers
//!
//! Status mapping differs per route: a failed lookup is 404, failed create or
//! update is 422, and any failed delete is 500.

use crate::{
    ApiError, ApiResult, AppState, CreatePersonRequest, PersonDto, SuccessResponse,
    UpdatePersonRequest,
};

use mereb_core::PersonCreate;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use log::{info, warn};

pub const CREATE_BIND_FAILED_MESSAGE: &str = "Invalid request: unable to bind data";
pub const UPDATE_BIND_FAILED_MESSAGE: &str = "Invalid request: unable to bind the provided data";
pub const PERSON_CREATED_MESSAGE: &str = "Person created successfully";
pub const PERSON_UPDATED_MESSAGE: &str = "Person updated successfully";
pub const PERSON_DELETED_MESSAGE: &str = "Person deleted successfully";
pub const INVALID_ID_MESSAGE: &str = "Invalid request: malformed person id";

// =============================================================================
// Handlers
// =============================================================================

/// GET /person
///
/// Always 200; storage failures degrade to an empty list.
pub async fn list_persons(State(state): State<AppState>) -> Json<Vec<PersonDto>> {
    let persons = state.person_service.get_all().await;
    Json(PersonDto::from_list(persons))
}

/// GET /person/{id}
pub async fn get_person(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<PersonDto>> {
    let id = person_id(path, ApiError::not_found)?;

    let person = state
        .person_service
        .get_by_id(&id)
        .await
        .map_err(|e| ApiError::not_found(e.message()))?;

    Ok(Json(person.into()))
}

/// POST /person
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<PersonDto>>)> {
    let Json(req) = payload.map_err(|rejection| {
        warn!("Rejected create payload: {}", rejection.body_text());
        ApiError::bad_request(CREATE_BIND_FAILED_MESSAGE)
    })?;

    let person = state
        .person_service
        .add(PersonCreate::from(req))
        .await
        .map_err(|e| ApiError::unprocessable(e.message()))?;

    info!("Created person {}", person.id);

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(
            PERSON_CREATED_MESSAGE,
            PersonDto::from(person),
        )),
    ))
}

/// PUT /person/{id}
///
/// Full replace of name, age and hobbies.
pub async fn update_person(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdatePersonRequest>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    let id = person_id(path, ApiError::unprocessable)?;

    let Json(req) = payload.map_err(|rejection| {
        warn!("Rejected update payload for {}: {}", id, rejection.body_text());
        ApiError::bad_request(UPDATE_BIND_FAILED_MESSAGE)
    })?;

    state
        .person_service
        .update_by_id(PersonCreate::from(req), &id)
        .await
        .map_err(|e| ApiError::unprocessable(e.message()))?;

    info!("Updated person {}", id);

    Ok(Json(SuccessResponse::without_data(PERSON_UPDATED_MESSAGE)))
}

/// DELETE /person/{id}
pub async fn delete_person(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    let id = person_id(path, ApiError::internal)?;

    state
        .person_service
        .delete_by_id(&id)
        .await
        .map_err(|e| ApiError::internal(e.message()))?;

    info!("Deleted person {}", id);

    Ok(Json(SuccessResponse::without_data(PERSON_DELETED_MESSAGE)))
}

/// Unwrap the `{id}` segment, answering an undecodable one with the route's
/// own failure status.
fn person_id(
    path: Result<Path<String>, PathRejection>,
    reject: fn(&'static str) -> ApiError,
) -> ApiResult<String> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            warn!("Rejected person id: {}", rejection.body_text());
            Err(reject(INVALID_ID_MESSAGE))
        }
    }
}
