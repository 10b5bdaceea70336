use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    topic::{
        adapter::incoming::web::transformer::TopicPageView,
        application::ports::{
            incoming::use_cases::ListTopicsError,
            outgoing::{PageRequest, TopicFilter},
        },
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTopicsQuery {
    /// default, recent/newest, vote/hottest, excellent, noreply/nobody
    #[param(example = "recent")]
    pub filters: Option<String>,
    #[param(example = 1)]
    pub page: Option<u32>,
    #[param(example = 15)]
    pub per_page: Option<u32>,
}

/// Paging for listings that have no filter of their own.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    #[param(example = 1)]
    pub page: Option<u32>,
    #[param(example = 15)]
    pub per_page: Option<u32>,
}

impl PageQuery {
    pub fn to_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// List topics
///
/// Public listing of live topics, ordered by the selected filter.
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    params(ListTopicsQuery),
    responses(
        (status = 200, description = "Page of topics", body = inline(SuccessResponse<TopicPageView>)),
        (status = 400, description = "Malformed query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/topics")]
pub async fn list_topics_handler(
    data: web::Data<AppState>,
    query: web::Query<ListTopicsQuery>,
) -> impl Responder {
    let filter = TopicFilter::from_api_name(query.filters.as_deref());
    let page = PageRequest::new(query.page, query.per_page);

    match data.topic.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(TopicPageView::from(result)),
        Err(err) => map_list_topics_error(err),
    }
}

/// List topics of a node
///
/// Same ordering as the default listing, scoped to one node.
#[utoipa::path(
    get,
    path = "/api/nodes/{node_id}/topics",
    tag = "topics",
    params(
        ("node_id" = Uuid, Path, description = "Node ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of topics", body = inline(SuccessResponse<TopicPageView>)),
        (status = 400, description = "Malformed node id or query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/nodes/{node_id}/topics")]
pub async fn list_node_topics_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let node_id = path.into_inner();

    match data
        .topic
        .list_by_node
        .execute(node_id, query.to_request())
        .await
    {
        Ok(result) => ApiResponse::success(TopicPageView::from(result)),
        Err(err) => map_list_topics_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_list_topics_error(err: ListTopicsError) -> HttpResponse {
    match err {
        ListTopicsError::QueryFailed(msg) => {
            error!(error = %msg, "Failed to list topics");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
