use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::topic::adapter::incoming::web::{
    routes::{
        CreateTopicRequest, InteractionStatusResponse, VoteDownResponse, VoteUpResponse,
    },
    transformer::{TopicAuthorView, TopicDetailView, TopicPageView, TopicView},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum Topics API",
        version = "1.0.0",
        description = "API documentation for forum topics: listings, creation, votes and bookmarks",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Listings
        crate::topic::adapter::incoming::web::routes::list_topics::list_topics_handler,
        crate::topic::adapter::incoming::web::routes::list_topics::list_node_topics_handler,
        crate::topic::adapter::incoming::web::routes::list_user_topics::list_user_topics_handler,
        crate::topic::adapter::incoming::web::routes::list_user_topics::list_user_favorites_handler,
        crate::topic::adapter::incoming::web::routes::list_user_topics::list_user_attentions_handler,

        // Single topic
        crate::topic::adapter::incoming::web::routes::create_topic::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topic::get_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic::delete_topic_handler,
        crate::topic::adapter::incoming::web::routes::topic_web_view::topic_web_view_handler,

        // Votes
        crate::topic::adapter::incoming::web::routes::vote_topic::vote_up_topic_handler,
        crate::topic::adapter::incoming::web::routes::vote_topic::vote_down_topic_handler,

        // Favorite / attention
        crate::topic::adapter::incoming::web::routes::topic_interactions::favorite_topic_handler,
        crate::topic::adapter::incoming::web::routes::topic_interactions::unfavorite_topic_handler,
        crate::topic::adapter::incoming::web::routes::topic_interactions::attention_topic_handler,
        crate::topic::adapter::incoming::web::routes::topic_interactions::unattention_topic_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Topic DTOs
            CreateTopicRequest,
            TopicView,
            TopicAuthorView,
            TopicDetailView,
            TopicPageView,
            VoteUpResponse,
            VoteDownResponse,
            InteractionStatusResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Topic endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_topic_path() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/topics",
            "/api/topics/{topic_id}",
            "/api/topics/{topic_id}/view",
            "/api/topics/{topic_id}/vote-up",
            "/api/topics/{topic_id}/vote-down",
            "/api/topics/{topic_id}/favorite",
            "/api/topics/{topic_id}/unfavorite",
            "/api/topics/{topic_id}/attention",
            "/api/topics/{topic_id}/unattention",
            "/api/nodes/{node_id}/topics",
            "/api/users/{user_id}/topics",
            "/api/users/{user_id}/favorites",
            "/api/users/{user_id}/attentions",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("BearerAuth"));
    }

    #[test]
    fn enveloped_action_results_name_their_data_fields() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("serializable document");

        let vote = &doc["paths"]["/api/topics/{topic_id}/vote-up"]["post"]["responses"]["200"];
        assert!(vote["description"]
            .as_str()
            .unwrap_or_default()
            .contains("data.vote_count"));

        let toggle = &doc["paths"]["/api/topics/{topic_id}/favorite"]["post"]["responses"]["200"];
        assert!(toggle["description"]
            .as_str()
            .unwrap_or_default()
            .contains("data.status"));
    }

    #[test]
    fn user_listings_only_take_a_page_parameter() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("serializable document");

        let params = doc["paths"]["/api/users/{user_id}/topics"]["get"]["parameters"]
            .as_array()
            .cloned()
            .unwrap_or_default();
        let names: Vec<&str> = params.iter().filter_map(|p| p["name"].as_str()).collect();

        assert!(names.contains(&"page"));
        assert!(!names.contains(&"per_page"));
    }
}
