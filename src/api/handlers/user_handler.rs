//! User handlers.

use std::io::ErrorKind;
use std::path::PathBuf;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::domain::{CreateUser, UpdateUser, UserFilter, UserProfile, UserStatus, UserType};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{Created, MessageResponse, Paginated, PaginationParams};

/// Query parameters accepted by the list endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersQuery {
    /// 1-indexed page number
    pub page: Option<u64>,
    /// Rows per page
    pub limit: Option<u64>,
    /// Restrict to one moderation status
    pub status: Option<UserStatus>,
    /// Restrict to one account type
    pub user_type: Option<UserType>,
}

/// Password reset request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    /// Replacement credential, stored as supplied
    #[schema(example = "NewPass123!")]
    pub password: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/reset_password_id/:id", put(reset_password_by_id))
        .route("/reset_password_email/:email", put(reset_password_by_email))
        .route("/thumb/:id", get(profile_thumb))
        .route("/full/:id", get(profile_full))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserProfile),
        (status = 500, description = "Persistence failure (e.g. duplicate email)")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> AppResult<Created<UserProfile>> {
    let profile = state.user_service.create_user(payload).await?;
    Ok(Created(profile))
}

/// List users, optionally filtered and paginated.
///
/// With no query parameters at all, returns every row (`total` equals the
/// row count). Otherwise returns the requested page of matches.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "`{data: [UserProfile], total}`: one page of users plus the total match count")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Paginated<UserProfile>>> {
    let filter = UserFilter {
        status: query.status,
        user_type: query.user_type,
    };

    if query.page.is_none()
        && query.limit.is_none()
        && filter.status.is_none()
        && filter.user_type.is_none()
    {
        let data = state.user_service.list_users().await?;
        let total = data.len() as u64;
        return Ok(Json(Paginated::new(data, total)));
    }

    let page = PaginationParams {
        page: query.page.unwrap_or(DEFAULT_PAGE_NUMBER),
        limit: query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
    };

    let result = state.user_service.list_users_filtered(filter, page).await?;
    Ok(Json(result))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User record", body = UserProfile),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserProfile>> {
    let profile = state.user_service.get_user(id).await?.ok_or_not_found()?;
    Ok(Json(profile))
}

/// Update a user, overwriting the four mutable fields
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserProfile),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUser>,
) -> AppResult<Json<UserProfile>> {
    let profile = state
        .user_service
        .update_user(id, payload)
        .await?
        .ok_or_not_found()?;
    Ok(Json(profile))
}

/// Delete a user and return the removed record
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Removed user record", body = UserProfile),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserProfile>> {
    let profile = state
        .user_service
        .delete_user(id)
        .await?
        .ok_or_not_found()?;
    Ok(Json(profile))
}

/// Reset a user's password by ID
#[utoipa::path(
    put,
    path = "/api/users/reset_password_id/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn reset_password_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ResetPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .user_service
        .reset_password_by_id(id, payload.password)
        .await?
        .ok_or_not_found()?;
    Ok(Json(MessageResponse::new("Password updated")))
}

/// Reset a user's password by email
#[utoipa::path(
    put,
    path = "/api/users/reset_password_email/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email address")),
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn reset_password_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<ResetPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .user_service
        .reset_password_by_email(&email, payload.password)
        .await?
        .ok_or_not_found()?;
    Ok(Json(MessageResponse::new("Password updated")))
}

/// Serve a user's profile thumbnail
#[utoipa::path(
    get,
    path = "/api/users/thumb/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "JPEG image bytes"),
        (status = 404, description = "No image for this user")
    )
)]
pub async fn profile_thumb(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    serve_image(state.media_dir.join(id.to_string()).join("thumb.jpg")).await
}

/// Serve a user's full-size profile image
#[utoipa::path(
    get,
    path = "/api/users/full/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "JPEG image bytes"),
        (status = 404, description = "No image for this user")
    )
)]
pub async fn profile_full(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    serve_image(state.media_dir.join(id.to_string()).join("full.jpg")).await
}

/// Read an image file and wrap it in a JPEG response
async fn serve_image(path: PathBuf) -> AppResult<Response> {
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes).into_response()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::NotFound),
        Err(e) => Err(AppError::internal(format!(
            "Failed to read image {}: {}",
            path.display(),
            e
        ))),
    }
}
