use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::domain::entities::{InteractionKind, InteractionToggle},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

/// `status` is false whenever the toggle could not be applied.
#[derive(Debug, Serialize, ToSchema)]
pub struct InteractionStatusResponse {
    #[schema(example = true)]
    pub status: bool,
}

async fn apply_toggle(
    data: &AppState,
    user: &AuthenticatedUser,
    topic_id: Uuid,
    kind: InteractionKind,
    toggle: InteractionToggle,
) -> HttpResponse {
    let status = match data
        .topic
        .interaction
        .execute(user.id(), topic_id, kind, toggle)
        .await
    {
        Ok(()) => true,
        Err(err) => {
            warn!(
                topic_id = %topic_id,
                user_id = %user.user_id,
                kind = kind.as_str(),
                toggle = ?toggle,
                error = %err,
                "Topic interaction failed"
            );
            false
        }
    };

    ApiResponse::success(InteractionStatusResponse { status })
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Favorite a topic
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/favorite",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Toggle result; read `data.status`", body = inline(SuccessResponse<InteractionStatusResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}/favorite")]
pub async fn favorite_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    apply_toggle(
        &data,
        &user,
        path.into_inner(),
        InteractionKind::Favorite,
        InteractionToggle::On,
    )
    .await
}

/// Remove a topic from favorites
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/unfavorite",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Toggle result; read `data.status`", body = inline(SuccessResponse<InteractionStatusResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}/unfavorite")]
pub async fn unfavorite_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    apply_toggle(
        &data,
        &user,
        path.into_inner(),
        InteractionKind::Favorite,
        InteractionToggle::Off,
    )
    .await
}

/// Follow a topic
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/attention",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Toggle result; read `data.status`", body = inline(SuccessResponse<InteractionStatusResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}/attention")]
pub async fn attention_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    apply_toggle(
        &data,
        &user,
        path.into_inner(),
        InteractionKind::Attention,
        InteractionToggle::On,
    )
    .await
}

/// Stop following a topic
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/unattention",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Toggle result; read `data.status`", body = inline(SuccessResponse<InteractionStatusResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}/unattention")]
pub async fn unattention_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    apply_toggle(
        &data,
        &user,
        path.into_inner(),
        InteractionKind::Attention,
        InteractionToggle::Off,
    )
    .await
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
