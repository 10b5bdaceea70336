pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, topic};

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::config::AppConfig;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::topic::adapter::outgoing::{
    NodeQueryPostgres, TopicInteractionRepositoryPostgres, TopicQueryPostgres,
    TopicRepositoryPostgres, TopicVoterPostgres,
};
use crate::topic::application::services::{
    CreateTopicService, DeleteTopicService, GetTopicService, ListNodeTopicsService,
    ListTopicsService, ListUserInteractionTopicsService, ListUserTopicsService,
    TopicInteractionService, VoteTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
}

/// Wires every topic use case to its Postgres adapters.
#[cfg(not(tarpaulin_include))]
fn build_topic_use_cases(db: &Arc<DatabaseConnection>) -> TopicUseCases {
    let topic_query = TopicQueryPostgres::new(Arc::clone(db));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(db));
    let node_query = NodeQueryPostgres::new(Arc::clone(db));
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let voter = TopicVoterPostgres::new(Arc::clone(db));
    let interactions = TopicInteractionRepositoryPostgres::new(Arc::clone(db));

    TopicUseCases {
        list: Arc::new(ListTopicsService::new(topic_query.clone())),
        list_by_user: Arc::new(ListUserTopicsService::new(
            topic_query.clone(),
            user_query.clone(),
        )),
        list_by_node: Arc::new(ListNodeTopicsService::new(topic_query.clone())),
        list_user_interactions: Arc::new(ListUserInteractionTopicsService::new(
            topic_query.clone(),
            user_query.clone(),
        )),
        create: Arc::new(CreateTopicService::new(
            topic_repo.clone(),
            node_query,
            user_query.clone(),
        )),
        get: Arc::new(GetTopicService::new(topic_query.clone())),
        delete: Arc::new(DeleteTopicService::new(topic_query, topic_repo, user_query)),
        vote: Arc::new(VoteTopicService::new(voter)),
        interaction: Arc::new(TopicInteractionService::new(interactions)),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(io::Error::other)?;
    let db_arc = Arc::new(conn);

    let state = AppState {
        topic: build_topic_use_cases(&db_arc),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt_config()));

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::topic::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topic listings
    cfg.service(routes::list_topics_handler);
    cfg.service(routes::list_node_topics_handler);
    cfg.service(routes::list_user_topics_handler);
    cfg.service(routes::list_user_favorites_handler);
    cfg.service(routes::list_user_attentions_handler);
    // Topic
    cfg.service(routes::create_topic_handler);
    cfg.service(routes::get_topic_handler);
    cfg.service(routes::delete_topic_handler);
    cfg.service(routes::topic_web_view_handler);
    // Votes
    cfg.service(routes::vote_up_topic_handler);
    cfg.service(routes::vote_down_topic_handler);
    // Favorite / attention
    cfg.service(routes::favorite_topic_handler);
    cfg.service(routes::unfavorite_topic_handler);
    cfg.service(routes::attention_topic_handler);
    cfg.service(routes::unattention_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
