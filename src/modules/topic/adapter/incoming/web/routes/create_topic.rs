use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::{
        adapter::incoming::web::transformer::TopicView,
        application::ports::incoming::use_cases::{CreateTopicCommand, CreateTopicError},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Fields accept any JSON value so that missing or mistyped ones reach the
/// use case and show up in the validation list.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    #[schema(value_type = Option<String>, example = "How do lifetimes work?")]
    #[serde(default)]
    pub title: Option<Value>,
    #[schema(value_type = Option<String>, example = "I keep fighting the borrow checker.")]
    #[serde(default)]
    pub body: Option<Value>,
    #[schema(value_type = Option<String>, example = "123e4567-e89b-12d3-a456-426614174000")]
    #[serde(default)]
    pub node_id: Option<Value>,
}

/// `null` counts as absent. Non-string scalars keep their JSON text.
fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a topic
///
/// The author must have a verified email address.
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = inline(SuccessResponse<TopicView>)),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (
            status = 422,
            description = "Unverified author or invalid payload",
            body = ErrorResponse,
            examples(
                ("Unverified author" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "TOPIC_STORE_FAILED",
                        "message": "Email address is not verified"
                    }
                }))),
                ("Invalid payload" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "TOPIC_VALIDATION_FAILED",
                        "message": "Could not create new topic.",
                        "details": ["Title is required", "Body is required"]
                    }
                })))
            )
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command = CreateTopicCommand {
        author: user.id(),
        title: field_text(payload.title),
        body: field_text(payload.body),
        node_id: field_text(payload.node_id),
    };

    match data.topic.create.execute(command).await {
        Ok(topic) => {
            info!(topic_id = %topic.id, user_id = %user.user_id, "Topic created");
            ApiResponse::created(TopicView::from(topic))
        }
        Err(err) => map_create_topic_error(err, &user),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(err: CreateTopicError, user: &AuthenticatedUser) -> HttpResponse {
    match err {
        CreateTopicError::UnverifiedAuthor => {
            warn!(user_id = %user.user_id, "Unverified user tried to create a topic");
            ApiResponse::unprocessable("TOPIC_STORE_FAILED", "Email address is not verified")
        }
        CreateTopicError::AuthorNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        CreateTopicError::Validation(messages) => ApiResponse::unprocessable_with_details(
            "TOPIC_VALIDATION_FAILED",
            "Could not create new topic.",
            messages,
        ),
        CreateTopicError::RepositoryError(msg) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to create topic");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
