use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::DeleteTopicError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Delete a topic
///
/// Soft delete; allowed for the owner and for moderators.
#[utoipa::path(
    delete,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller may not delete this topic", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/topics/{topic_id}")]
pub async fn delete_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.delete.execute(user.id(), topic_id).await {
        Ok(()) => {
            info!(topic_id = %topic_id, user_id = %user.user_id, "Topic deleted");
            ApiResponse::no_content()
        }
        Err(err) => map_delete_topic_error(err, topic_id, &user),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_topic_error(
    err: DeleteTopicError,
    topic_id: Uuid,
    user: &AuthenticatedUser,
) -> HttpResponse {
    match err {
        DeleteTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        DeleteTopicError::Forbidden => {
            warn!(topic_id = %topic_id, user_id = %user.user_id, "Delete denied");
            ApiResponse::forbidden("FORBIDDEN", "You are not allowed to delete this topic")
        }
        DeleteTopicError::DatabaseError(msg) => {
            error!(topic_id = %topic_id, error = %msg, "Failed to delete topic");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
