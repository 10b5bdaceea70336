pub mod create_topic;
pub mod delete_topic;
pub mod get_topic;
pub mod list_topics;
pub mod list_user_topics;
pub mod topic_interactions;
pub mod topic_web_view;
pub mod vote_topic;

pub use create_topic::{create_topic_handler, CreateTopicRequest};
pub use delete_topic::delete_topic_handler;
pub use get_topic::get_topic_handler;
pub use list_topics::{list_node_topics_handler, list_topics_handler, ListTopicsQuery, PageQuery};
pub use list_user_topics::{
    list_user_attentions_handler, list_user_favorites_handler, list_user_topics_handler,
    UserPageQuery,
};
pub use topic_interactions::{
    attention_topic_handler, favorite_topic_handler, unattention_topic_handler,
    unfavorite_topic_handler, InteractionStatusResponse,
};
pub use topic_web_view::topic_web_view_handler;
pub use vote_topic::{
    vote_down_topic_handler, vote_up_topic_handler, VoteDownResponse, VoteUpResponse,
};
