//! Path and query extractors that reject with `AppError`.
//!
//! Drop-in replacements for axum's `Path`/`Query` and axum-extra's
//! multi-value `Query`, so malformed ids and missing parameters produce
//! the same JSON error body as every other invalid request.

use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    FromRequestParts,
};

use crate::errors::AppError;

/// Path parameters, e.g. `Path(pet_id): Path<i64>`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// Single-valued query parameters
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

/// Query parameters that may repeat (`?status=A&status=B`)
#[derive(FromRequestParts)]
#[from_request(via(axum_extra::extract::Query), rejection(AppError))]
pub struct MultiQuery<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::invalid_resource(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::invalid_resource(rejection.body_text())
    }
}

impl From<axum_extra::extract::QueryRejection> for AppError {
    fn from(rejection: axum_extra::extract::QueryRejection) -> Self {
        AppError::invalid_resource(rejection.to_string())
    }
}
