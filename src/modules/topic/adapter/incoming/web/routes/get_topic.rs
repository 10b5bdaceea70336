use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    topic::{
        adapter::incoming::web::transformer::TopicDetailView,
        application::ports::incoming::use_cases::GetTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Get a topic
///
/// Returns the topic together with its owning user.
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Topic found", body = inline(SuccessResponse<TopicDetailView>)),
        (
            status = 404,
            description = "Topic not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "TOPIC_NOT_FOUND",
                    "message": "Topic not found"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/topics/{topic_id}")]
pub async fn get_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.get.execute(topic_id).await {
        Ok(topic) => ApiResponse::success(TopicDetailView::from(topic)),
        Err(err) => map_get_topic_error(err, topic_id),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_get_topic_error(err: GetTopicError, topic_id: Uuid) -> HttpResponse {
    match err {
        GetTopicError::NotFound => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        GetTopicError::QueryFailed(msg) => {
            error!(topic_id = %topic_id, error = %msg, "Failed to fetch topic");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
