//! Handlers for the `/persons` resource.
//!
//! Registration and edits go through the person form model before anything
//! reaches the store; the search endpoint accepts a formatted national ID.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cadastro_core::error::CoreError;
use cadastro_core::person::{validate_fields, validate_new_person, Field, PersonForm};
use cadastro_core::types::DbId;
use cadastro_core::validation::{digits_only, national_id};
use cadastro_db::models::person::{CreatePerson, Person, UpdatePerson};
use cadastro_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/persons
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Person>>>> {
    let persons = PersonRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(persons)))
}

/// POST /api/v1/persons
///
/// Normalizes the form, validates every field, and rejects a national ID
/// that is already registered. The stored record is the validated one.
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<PersonForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Person>>)> {
    let form = form.normalized();
    let report = validate_new_person(&form);
    if !report.is_valid() {
        return Err(CoreError::InvalidFields(report).into());
    }

    ensure_national_id_free(&state, &form.national_id).await?;

    let person = PersonRepo::create(&state.pool, &CreatePerson::from(form)).await?;

    tracing::info!(person_id = person.id, "Person registered");

    Ok((StatusCode::CREATED, Json(DataResponse::new(person))))
}

/// GET /api/v1/persons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Person>>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Person",
            id,
        })?;
    Ok(Json(DataResponse::new(person)))
}

/// PUT /api/v1/persons/{id}
///
/// Partial update. Only the fields present in the body are normalized and
/// re-validated.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<Json<DataResponse<Person>>> {
    if input.is_empty() {
        return Err(AppError::BadRequest(
            "At least one field must be provided".to_string(),
        ));
    }
    let input = input.normalized();

    let existing = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Person",
            id,
        })?;

    let merged = input.apply_to(existing.to_form());
    let report = validate_fields(&merged, &changed_fields(&input));
    if !report.is_valid() {
        return Err(CoreError::InvalidFields(report).into());
    }

    if merged.national_id != existing.national_id {
        ensure_national_id_free(&state, &merged.national_id).await?;
    }

    let person = PersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Person",
            id,
        })?;

    tracing::info!(person_id = id, "Person updated");

    Ok(Json(DataResponse::new(person)))
}

/// DELETE /api/v1/persons/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PersonRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(person_id = id, "Person deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))
    }
}

/// GET /api/v1/persons/by-national-id/{national_id}
///
/// Formatting characters are stripped before the lookup, so
/// `529.982.247-25` and `52998224725` find the same record.
pub async fn get_by_national_id(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Json<DataResponse<Person>>> {
    let digits = digits_only(&raw);
    if digits.len() != national_id::LENGTH {
        return Err(CoreError::Validation(format!(
            "National ID must have {} digits",
            national_id::LENGTH
        ))
        .into());
    }

    let person = PersonRepo::find_by_national_id(&state.pool, &digits)
        .await?
        .ok_or(CoreError::NotFoundByKey {
            entity: "Person",
            key: "national ID",
            value: digits,
        })?;
    Ok(Json(DataResponse::new(person)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fields present in a partial update.
fn changed_fields(input: &UpdatePerson) -> Vec<Field> {
    [
        (Field::Name, input.name.is_some()),
        (Field::NationalId, input.national_id.is_some()),
        (Field::Sex, input.sex.is_some()),
        (Field::Email, input.email.is_some()),
        (Field::Phone, input.phone.is_some()),
    ]
    .into_iter()
    .filter_map(|(field, present)| present.then_some(field))
    .collect()
}

async fn ensure_national_id_free(state: &AppState, national_id: &str) -> AppResult<()> {
    if PersonRepo::exists_by_national_id(&state.pool, national_id).await? {
        return Err(CoreError::Conflict(format!(
            "A person with national ID {national_id} is already registered"
        ))
        .into());
    }
    Ok(())
}
