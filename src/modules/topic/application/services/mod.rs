mod create_topic_service;
mod delete_topic_service;
mod get_topic_service;
mod list_topics_service;
mod list_user_topics_service;
mod topic_interaction_service;
mod vote_topic_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use get_topic_service::GetTopicService;
pub use list_topics_service::{ListNodeTopicsService, ListTopicsService};
pub use list_user_topics_service::{ListUserInteractionTopicsService, ListUserTopicsService};
pub use topic_interaction_service::TopicInteractionService;
pub use vote_topic_service::VoteTopicService;
