use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::application::domain::entities::UserId,
    shared::api::ApiResponse,
    topic::{
        adapter::incoming::web::transformer::TopicPageView,
        application::{
            domain::entities::InteractionKind,
            ports::{incoming::use_cases::ListUserTopicsError, outgoing::PageRequest},
        },
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Per-user listings always use the default page size.
#[derive(Debug, Deserialize, IntoParams)]
pub struct UserPageQuery {
    #[param(example = 1)]
    pub page: Option<u32>,
}

impl UserPageQuery {
    pub fn to_request(&self) -> PageRequest {
        PageRequest::new(self.page, None)
    }
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// List a user's topics
///
/// Newest first.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/topics",
    tag = "topics",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        UserPageQuery
    ),
    responses(
        (status = 200, description = "Page of topics", body = inline(SuccessResponse<TopicPageView>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/users/{user_id}/topics")]
pub async fn list_user_topics_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<UserPageQuery>,
) -> impl Responder {
    let user = UserId::from(path.into_inner());

    match data
        .topic
        .list_by_user
        .execute(user, query.to_request())
        .await
    {
        Ok(result) => ApiResponse::success(TopicPageView::from(result)),
        Err(err) => map_list_user_topics_error(err),
    }
}

/// List a user's favorite topics
///
/// Most recently favorited first.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/favorites",
    tag = "topics",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        UserPageQuery
    ),
    responses(
        (status = 200, description = "Page of topics", body = inline(SuccessResponse<TopicPageView>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/users/{user_id}/favorites")]
pub async fn list_user_favorites_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<UserPageQuery>,
) -> impl Responder {
    list_interactions(&data, path.into_inner(), InteractionKind::Favorite, &query).await
}

/// List topics a user follows
///
/// Most recently followed first.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/attentions",
    tag = "topics",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        UserPageQuery
    ),
    responses(
        (status = 200, description = "Page of topics", body = inline(SuccessResponse<TopicPageView>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/users/{user_id}/attentions")]
pub async fn list_user_attentions_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<UserPageQuery>,
) -> impl Responder {
    list_interactions(&data, path.into_inner(), InteractionKind::Attention, &query).await
}

async fn list_interactions(
    data: &AppState,
    user_id: Uuid,
    kind: InteractionKind,
    query: &UserPageQuery,
) -> HttpResponse {
    match data
        .topic
        .list_user_interactions
        .execute(UserId::from(user_id), kind, query.to_request())
        .await
    {
        Ok(result) => ApiResponse::success(TopicPageView::from(result)),
        Err(err) => map_list_user_topics_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_list_user_topics_error(err: ListUserTopicsError) -> HttpResponse {
    match err {
        ListUserTopicsError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        ListUserTopicsError::QueryFailed(msg) => {
            error!(error = %msg, "Failed to list user topics");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
