use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::PetResult;
use crate::models::{CreatePet, Pet, UpdatePet};
use crate::repository::PetRepository;
use crate::service::PetService;

/// OpenAPI documentation for the Pets API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_pets,
        create_pet,
        get_pet,
        list_pets_by_type,
        update_pet,
        delete_pet,
    ),
    components(
        schemas(Pet, CreatePet, UpdatePet),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Pets", description = "Pet profile endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the pets router with all HTTP endpoints
pub fn router<R: PetRepository + 'static>(service: PetService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_pets).post(create_pet))
        .route("/types/{pet_type}", get(list_pets_by_type))
        .route(
            "/{id}",
            get(get_pet).patch(update_pet).delete(delete_pet),
        )
        .with_state(shared_service)
}

/// List all pets
#[utoipa::path(
    get,
    path = "",
    tag = "Pets",
    responses(
        (status = 200, description = "List of pets (possibly empty)", body = Vec<Pet>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_pets<R: PetRepository>(
    State(service): State<Arc<PetService<R>>>,
) -> PetResult<Json<Vec<Pet>>> {
    let pets = service.list_pets().await?;
    Ok(Json(pets))
}

/// Create a new pet profile
///
/// A caller-supplied `id` is ignored; the identifier is always generated.
#[utoipa::path(
    post,
    path = "",
    tag = "Pets",
    request_body = CreatePet,
    responses(
        (status = 201, description = "Pet created successfully", body = Pet),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_pet<R: PetRepository>(
    State(service): State<Arc<PetService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePet>,
) -> PetResult<impl IntoResponse> {
    let pet = service.create_pet(input).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

/// Get a pet by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Pets",
    params(
        ("id" = String, Path, description = "Pet ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Pet found", body = Pet),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_pet<R: PetRepository>(
    State(service): State<Arc<PetService<R>>>,
    Path(id): Path<String>,
) -> PetResult<Json<Pet>> {
    let pet = service.get_pet(&id).await?;
    Ok(Json(pet))
}

/// List all pets of one type (exact, case-sensitive match)
#[utoipa::path(
    get,
    path = "/types/{pet_type}",
    tag = "Pets",
    params(
        ("pet_type" = String, Path, description = "Pet type, e.g. \"dog\"")
    ),
    responses(
        (status = 200, description = "Matching pets (possibly empty)", body = Vec<Pet>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_pets_by_type<R: PetRepository>(
    State(service): State<Arc<PetService<R>>>,
    Path(pet_type): Path<String>,
) -> PetResult<Json<Vec<Pet>>> {
    let pets = service.list_pets_by_type(&pet_type).await?;
    Ok(Json(pets))
}

/// Merge a partial field set into a pet
///
/// Only the fields present in the body are overwritten; `id` and
/// `birthdate` are write-once and silently stripped from the patch.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Pets",
    params(
        ("id" = String, Path, description = "Pet ID (24-character hex)")
    ),
    request_body = UpdatePet,
    responses(
        (status = 204, description = "Pet updated successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_pet<R: PetRepository>(
    State(service): State<Arc<PetService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdatePet>,
) -> PetResult<impl IntoResponse> {
    service.update_pet(&id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a pet
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Pets",
    params(
        ("id" = String, Path, description = "Pet ID (24-character hex)")
    ),
    responses(
        (status = 204, description = "Pet deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_pet<R: PetRepository>(
    State(service): State<Arc<PetService<R>>>,
    Path(id): Path<String>,
) -> PetResult<impl IntoResponse> {
    service.delete_pet(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
