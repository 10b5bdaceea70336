use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{
        domain::entities::VoteDirection, ports::incoming::use_cases::VoteTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct VoteUpResponse {
    #[serde(rename = "vote-up")]
    #[schema(example = true)]
    pub vote_up: bool,
    #[schema(example = 4)]
    pub vote_count: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VoteDownResponse {
    #[serde(rename = "vote-down")]
    #[schema(example = true)]
    pub vote_down: bool,
    #[schema(example = 2)]
    pub vote_count: i32,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Up-vote a topic
///
/// Voting up again withdraws the vote; voting up after a down-vote flips it.
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/vote-up",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Vote applied; read `data.vote_count`", body = inline(SuccessResponse<VoteUpResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}/vote-up")]
pub async fn vote_up_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data
        .topic
        .vote
        .execute(user.id(), topic_id, VoteDirection::Up)
        .await
    {
        Ok(outcome) => {
            debug!(topic_id = %topic_id, current = ?outcome.current, "Up-vote applied");
            ApiResponse::success(VoteUpResponse {
                vote_up: true,
                vote_count: outcome.vote_count,
            })
        }
        Err(err) => map_vote_topic_error(err, topic_id),
    }
}

/// Down-vote a topic
///
/// Voting down again withdraws the vote; voting down after an up-vote flips it.
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/vote-down",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Vote applied; read `data.vote_count`", body = inline(SuccessResponse<VoteDownResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}/vote-down")]
pub async fn vote_down_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data
        .topic
        .vote
        .execute(user.id(), topic_id, VoteDirection::Down)
        .await
    {
        Ok(outcome) => {
            debug!(topic_id = %topic_id, current = ?outcome.current, "Down-vote applied");
            ApiResponse::success(VoteDownResponse {
                vote_down: true,
                vote_count: outcome.vote_count,
            })
        }
        Err(err) => map_vote_topic_error(err, topic_id),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_vote_topic_error(err: VoteTopicError, topic_id: Uuid) -> HttpResponse {
    match err {
        VoteTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        VoteTopicError::VoteFailed(msg) => {
            error!(topic_id = %topic_id, error = %msg, "Failed to apply vote");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{bearer, token_provider_data},
        stubs::StubVoteTopicUseCase,
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn vote_up_returns_flag_and_count() {
        // Arrange
        let stub = StubVoteTopicUseCase::outcome(Some(VoteDirection::Up), 4);
        let last_direction = stub.last_direction.clone();
        let state = TestAppStateBuilder::default().with_vote_topic(stub).build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(vote_up_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/topics/{}/vote-up", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*last_direction.lock().unwrap(), Some(VoteDirection::Up));

        let json = read_json(resp).await;
        assert_eq!(json["data"]["vote-up"], true);
        assert_eq!(json["data"]["vote_count"], 4);
    }

    #[actix_web::test]
    async fn vote_down_returns_flag_and_count() {
        // Arrange
        let stub = StubVoteTopicUseCase::outcome(Some(VoteDirection::Down), -1);
        let last_direction = stub.last_direction.clone();
        let state = TestAppStateBuilder::default().with_vote_topic(stub).build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(vote_down_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/topics/{}/vote-down", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*last_direction.lock().unwrap(), Some(VoteDirection::Down));

        let json = read_json(resp).await;
        assert_eq!(json["data"]["vote-down"], true);
        assert_eq!(json["data"]["vote_count"], -1);
        assert!(json["data"].get("vote-up").is_none());
    }

    #[actix_web::test]
    async fn vote_on_missing_topic_returns_not_found() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_vote_topic(StubVoteTopicUseCase::error(VoteTopicError::TopicNotFound))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(vote_up_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/topics/{}/vote-up", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "TOPIC_NOT_FOUND");
    }

    #[actix_web::test]
    async fn vote_failure_returns_internal_error() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_vote_topic(StubVoteTopicUseCase::error(VoteTopicError::VoteFailed(
                "deadlock".to_string(),
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(vote_down_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/topics/{}/vote-down", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn vote_without_token_returns_unauthorized() {
        // Arrange
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(vote_up_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/topics/{}/vote-up", Uuid::new_v4()))
            .to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
