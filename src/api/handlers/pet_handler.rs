//! Pet handlers.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::Json,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::api::extractors::{MultiQuery, Path, ValidatedJson};
use crate::api::AppState;
use crate::config::EMPTY_TAG_LIST;
use crate::domain::{Pet, PetStatus};
use crate::errors::{AppError, AppResult};
use crate::services::ImageUpload;
use crate::types::{ApiResponse, Created, NoContent};

/// Repeated `status` query parameters
#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub status: Vec<String>,
}

/// Repeated `tags` query parameters
#[derive(Debug, Default, Deserialize)]
pub struct TagsQuery {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Form fields for a partial pet update.
///
/// Read from either an urlencoded or a `multipart/form-data` body.
#[derive(Debug, Default, Deserialize)]
pub struct PetForm {
    pub name: Option<String>,
    pub status: Option<String>,
}

#[async_trait]
impl<S> FromRequest<S> for PetForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(form) = Form::<PetForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid_resource(e.body_text()))?;
            return Ok(form);
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_resource(e.body_text()))?;

        let mut form = PetForm::default();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("name") => {
                    form.name = Some(field.text().await.map_err(multipart_error)?);
                }
                Some("status") => {
                    form.status = Some(field.text().await.map_err(multipart_error)?);
                }
                _ => {}
            }
        }
        Ok(form)
    }
}

/// Create pet routes
pub fn pet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_pets).post(add_pet).put(update_pet))
        .route("/findByStatus", get(find_by_status))
        .route("/findByTags", get(find_by_tags))
        .route(
            "/:pet_id",
            get(get_pet).post(update_with_form).delete(delete_pet),
        )
        .route("/:pet_id/uploadImage", post(upload_image))
}

pub async fn list_pets(State(state): State<AppState>) -> AppResult<Json<Vec<Pet>>> {
    let pets = state.pet_service.list_pets().await?;
    Ok(Json(pets))
}

pub async fn get_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> AppResult<Json<Pet>> {
    let pet = state.pet_service.get_pet(pet_id).await?;
    Ok(Json(pet))
}

pub async fn add_pet(
    State(state): State<AppState>,
    ValidatedJson(pet): ValidatedJson<Pet>,
) -> AppResult<Created<Pet>> {
    let pet = state.pet_service.save_pet(pet).await?;
    Ok(Created(pet))
}

pub async fn update_pet(
    State(state): State<AppState>,
    ValidatedJson(pet): ValidatedJson<Pet>,
) -> AppResult<Json<Pet>> {
    let pet = state.pet_service.update_pet(pet).await?;
    Ok(Json(pet))
}

pub async fn delete_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> AppResult<NoContent> {
    state.pet_service.delete_pet(pet_id).await?;
    Ok(NoContent)
}

/// Find pets whose status is any of the requested ones.
///
/// Accepts repeated parameters (`?status=A&status=B`) as well as
/// comma-separated values (`?status=A,B`).
pub async fn find_by_status(
    State(state): State<AppState>,
    MultiQuery(query): MultiQuery<StatusQuery>,
) -> AppResult<Json<Vec<Pet>>> {
    let statuses = split_values(&query.status)
        .map(str::parse::<PetStatus>)
        .collect::<AppResult<Vec<_>>>()?;

    let pets = state.pet_service.find_by_status(statuses).await?;
    Ok(Json(pets))
}

/// Find pets carrying at least one of the requested tag names
pub async fn find_by_tags(
    State(state): State<AppState>,
    MultiQuery(query): MultiQuery<TagsQuery>,
) -> AppResult<Json<Vec<Pet>>> {
    let tags: Vec<String> = split_values(&query.tags).map(str::to_string).collect();
    if tags.is_empty() {
        return Err(AppError::invalid_resource(EMPTY_TAG_LIST));
    }

    let pets = state.pet_service.find_by_tags(tags).await?;
    Ok(Json(pets))
}

pub async fn update_with_form(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
    form: PetForm,
) -> AppResult<Json<ApiResponse>> {
    let status = form
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<PetStatus>)
        .transpose()?;
    let name = form.name.filter(|n| !n.trim().is_empty());

    let response = state
        .pet_service
        .update_with_form(pet_id, name, status)
        .await?;
    Ok(Json(response))
}

/// Accept a multipart upload with an optional `additionalMetadata` text
/// part and one file part
pub async fn upload_image(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse>> {
    let mut additional_metadata = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some("additionalMetadata") {
            additional_metadata = Some(field.text().await.map_err(multipart_error)?);
            continue;
        }

        if let Some(file_name) = field.file_name().map(str::to_string) {
            let bytes = field.bytes().await.map_err(multipart_error)?;
            file = Some((file_name, bytes.len()));
        }
    }

    let (file_name, size) = file.ok_or_else(|| AppError::invalid_resource("Missing file part"))?;
    let upload = ImageUpload {
        additional_metadata,
        file_name,
        size,
    };

    let response = state.pet_service.upload_image(pet_id, upload).await?;
    Ok(Json(response))
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::invalid_resource(err.body_text())
}

fn split_values(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
