//! Pet service - Handles pet-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::API_RESPONSE_TYPE;
use crate::domain::validation::name_rules;
use crate::domain::{Pet, PetStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::ApiResponse;

/// Uploaded image as received by the boundary layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub additional_metadata: Option<String>,
    pub file_name: String,
    pub size: usize,
}

/// Pet service trait for dependency injection.
#[async_trait]
pub trait PetService: Send + Sync {
    async fn list_pets(&self) -> AppResult<Vec<Pet>>;

    async fn get_pet(&self, id: i64) -> AppResult<Pet>;

    /// Create or overwrite a pet
    async fn save_pet(&self, pet: Pet) -> AppResult<Pet>;

    async fn update_pet(&self, pet: Pet) -> AppResult<Pet>;

    async fn delete_pet(&self, id: i64) -> AppResult<()>;

    async fn find_by_status(&self, statuses: Vec<PetStatus>) -> AppResult<Vec<Pet>>;

    async fn find_by_tags(&self, tag_names: Vec<String>) -> AppResult<Vec<Pet>>;

    /// Change name and/or status from form fields
    async fn update_with_form(
        &self,
        id: i64,
        name: Option<String>,
        status: Option<PetStatus>,
    ) -> AppResult<ApiResponse>;

    /// Attach an uploaded image to a pet
    async fn upload_image(&self, id: i64, upload: ImageUpload) -> AppResult<ApiResponse>;
}

/// Concrete implementation of PetService using Unit of Work.
pub struct PetManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PetManager<U> {
    /// Create new pet service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PetService for PetManager<U> {
    async fn list_pets(&self) -> AppResult<Vec<Pet>> {
        Ok(self.uow.pets().list())
    }

    async fn get_pet(&self, id: i64) -> AppResult<Pet> {
        self.uow.pets().get_by_id(id)
    }

    async fn save_pet(&self, pet: Pet) -> AppResult<Pet> {
        let pet = self.uow.pets().save(pet);
        tracing::info!(pet_id = pet.id, "Pet saved");
        Ok(pet)
    }

    async fn update_pet(&self, pet: Pet) -> AppResult<Pet> {
        let pet = self.uow.pets().update(pet)?;
        tracing::info!(pet_id = pet.id, "Pet updated");
        Ok(pet)
    }

    async fn delete_pet(&self, id: i64) -> AppResult<()> {
        self.uow.pets().delete_by_id(id)?;
        tracing::info!(pet_id = id, "Pet deleted");
        Ok(())
    }

    async fn find_by_status(&self, statuses: Vec<PetStatus>) -> AppResult<Vec<Pet>> {
        Ok(self.uow.pets().get_by_status(&statuses))
    }

    async fn find_by_tags(&self, tag_names: Vec<String>) -> AppResult<Vec<Pet>> {
        Ok(self.uow.pets().get_by_tags(&tag_names))
    }

    async fn update_with_form(
        &self,
        id: i64,
        name: Option<String>,
        status: Option<PetStatus>,
    ) -> AppResult<ApiResponse> {
        if let Some(name) = name.as_deref() {
            name_rules(name).map_err(|e| {
                AppError::invalid_field(
                    "name",
                    e.message.map(|m| m.to_string()).unwrap_or_default(),
                )
            })?;
        }

        self.uow.pets().update_with_form(id, name, status)?;
        tracing::info!(pet_id = id, "Pet updated from form data");

        Ok(ApiResponse::ok(
            API_RESPONSE_TYPE,
            format!("Pet with id {} was updated", id),
        ))
    }

    async fn upload_image(&self, id: i64, upload: ImageUpload) -> AppResult<ApiResponse> {
        self.uow.pets().attach_image(id, upload.file_name.clone())?;
        tracing::info!(pet_id = id, file = %upload.file_name, bytes = upload.size, "Image attached");

        Ok(ApiResponse::ok(
            API_RESPONSE_TYPE,
            format!(
                "additionalMetadata: {}\nFile uploaded to ./{}, {} bytes",
                upload.additional_metadata.unwrap_or_default(),
                upload.file_name,
                upload.size
            ),
        ))
    }
}
