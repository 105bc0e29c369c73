//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::api::extractors::{Path, Query, ValidatedJson, ValidatedJsonList};
use crate::api::AppState;
use crate::domain::User;
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse, NoContent};

/// Login query parameters
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub username: String,
    pub password: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user).put(update_user))
        .route("/createWithArray", post(create_users))
        .route("/createWithList", post(create_users))
        .route("/login", get(login))
        .route("/logout", get(logout))
        .route(
            "/username/:username",
            get(get_by_username)
                .put(update_by_username)
                .delete(delete_by_username),
        )
        .route("/:user_id", get(get_user).delete(delete_user))
}

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(user_id).await?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<User>,
) -> AppResult<Created<User>> {
    let user = state.user_service.save_user(user).await?;
    Ok(Created(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<User>,
) -> AppResult<Json<User>> {
    let user = state.user_service.update_user(user).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<NoContent> {
    state.user_service.delete_user(user_id).await?;
    Ok(NoContent)
}

/// Bulk create, shared by `createWithArray` and `createWithList`
pub async fn create_users(
    State(state): State<AppState>,
    ValidatedJsonList(users): ValidatedJsonList<User>,
) -> AppResult<Created<Vec<User>>> {
    let users = state.user_service.save_users(users).await?;
    Ok(Created(users))
}

pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_by_username(&username).await?;
    Ok(Json(user))
}

/// Replace the user stored under `username`, keeping its id
pub async fn update_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidatedJson(user): ValidatedJson<User>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .update_by_username(user, &username)
        .await?;
    Ok(Json(user))
}

pub async fn delete_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<NoContent> {
    state.user_service.delete_by_username(&username).await?;
    Ok(NoContent)
}

pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> AppResult<Json<MessageResponse>> {
    let message = state
        .user_service
        .login(&query.username, &query.password)
        .await?;
    Ok(Json(MessageResponse::new(message)))
}

pub async fn logout(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    let message = state.user_service.logout().await?;
    Ok(Json(MessageResponse::new(message)))
}
