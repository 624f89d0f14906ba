//! Message handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::AppState;
use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::domain::{Message, MessageType, UpdateMessage};
use crate::errors::{AppResult, OptionExt};
use crate::types::{Paginated, PaginationParams};

/// Query parameters accepted by the message list endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListMessagesQuery {
    /// 1-indexed page number
    pub page: Option<u64>,
    /// Rows per page
    pub limit: Option<u64>,
    /// Restrict to one message category
    #[serde(rename = "type")]
    pub message_type: Option<MessageType>,
}

/// Create message routes
pub fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_messages))
        .route("/:id", put(update_message))
        .route("/read/:id", put(mark_read))
}

/// List messages, optionally filtered by type
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "Messages",
    params(ListMessagesQuery),
    responses(
        (status = 200, description = "`{data: [Message], total}`: one page of messages plus the total match count")
    )
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ListMessagesQuery>,
) -> AppResult<Json<Paginated<Message>>> {
    let page = PaginationParams {
        page: query.page.unwrap_or(DEFAULT_PAGE_NUMBER),
        limit: query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
    };

    let result = state
        .message_service
        .list_messages(query.message_type, page)
        .await?;
    Ok(Json(result))
}

/// Update a message's mutable fields
#[utoipa::path(
    put,
    path = "/api/messages/{id}",
    tag = "Messages",
    params(("id" = i32, Path, description = "Message ID")),
    request_body = UpdateMessage,
    responses(
        (status = 200, description = "Message updated", body = Message),
        (status = 404, description = "Message not found")
    )
)]
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMessage>,
) -> AppResult<Json<Message>> {
    let message = state
        .message_service
        .update_message(id, payload)
        .await?
        .ok_or_not_found()?;
    Ok(Json(message))
}

/// Mark a message as read
#[utoipa::path(
    put,
    path = "/api/messages/read/{id}",
    tag = "Messages",
    params(("id" = i32, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message flagged as read", body = Message),
        (status = 404, description = "Message not found")
    )
)]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Message>> {
    let message = state
        .message_service
        .mark_read(id)
        .await?
        .ok_or_not_found()?;
    Ok(Json(message))
}
