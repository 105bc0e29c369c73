//! Validated JSON extractor - Combines deserialization with validation.

use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::config::INVALID_REQUEST_BODY;
use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Malformed bodies are rejected as an invalid resource; field failures
/// become a field-path -> message map.
///
/// # Example
///
/// ```rust,ignore
/// use petstore::api::extractors::ValidatedJson;
/// use petstore::domain::Pet;
///
/// async fn add_pet(ValidatedJson(pet): ValidatedJson<Pet>) {
///     // pet is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e.body_text(), "Rejected request body");
            AppError::invalid_resource(INVALID_REQUEST_BODY)
        })?;

        value
            .validate()
            .map_err(|e| AppError::Validation(flatten_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// JSON array extractor that validates every element.
///
/// Failing elements are reported under `[index].field` paths.
pub struct ValidatedJsonList<T>(pub Vec<T>);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJsonList<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<Vec<T>>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(values) = Json::<Vec<T>>::from_request(req, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e.body_text(), "Rejected request body");
                AppError::invalid_resource(INVALID_REQUEST_BODY)
            })?;

        let mut fields = BTreeMap::new();
        for (index, value) in values.iter().enumerate() {
            if let Err(e) = value.validate() {
                collect(&e, &format!("[{}]", index), &mut fields);
            }
        }

        if !fields.is_empty() {
            return Err(AppError::Validation(fields));
        }

        Ok(ValidatedJsonList(values))
    }
}

/// Flatten nested validation errors into `path -> message` pairs.
///
/// Paths use the wire (camelCase) field names: `name`, `category.name`,
/// `tags[0].name`.
pub fn flatten_validation_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    collect(errors, "", &mut fields);
    fields
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut BTreeMap<String, String>) {
    for (field, kind) in errors.errors() {
        let path = join_path(prefix, field);

        match kind {
            ValidationErrorsKind::Field(errs) => {
                if let Some(first) = errs.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", path));
                    out.insert(path, message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    let field = camel_case(field);
    if prefix.is_empty() {
        field
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Pet, PetStatus, Tag};

    fn pet() -> Pet {
        Pet {
            id: 1,
            name: "doggie".to_string(),
            category: Category {
                id: 1,
                name: "dogs".to_string(),
            },
            photo_urls: vec![],
            tags: vec![Tag {
                id: 1,
                name: "friendly".to_string(),
            }],
            status: PetStatus::Available,
        }
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("photo_urls"), "photoUrls");
        assert_eq!(camel_case("name"), "name");
        assert_eq!(camel_case("user_status"), "userStatus");
    }

    #[test]
    fn test_flatten_nested_paths() {
        let mut invalid = pet();
        invalid.name = "do".to_string();
        invalid.category.name = " ".to_string();
        invalid.tags[0].id = 0;

        let fields = flatten_validation_errors(&invalid.validate().unwrap_err());

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("category.name"));
        assert!(fields.contains_key("tags[0].id"));
        assert_eq!(fields.len(), 3);
    }
}
