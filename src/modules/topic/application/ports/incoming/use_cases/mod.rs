mod create_topic;
mod delete_topic;
mod get_topic;
mod list_topics;
mod topic_interaction;
mod vote_topic;

pub use create_topic::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, BODY_MIN_CHARS, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};
pub use delete_topic::{DeleteTopicError, DeleteTopicUseCase};
pub use get_topic::{GetTopicError, GetTopicUseCase};
pub use list_topics::{
    ListNodeTopicsUseCase, ListTopicsError, ListTopicsUseCase, ListUserInteractionTopicsUseCase,
    ListUserTopicsError, ListUserTopicsUseCase,
};
pub use topic_interaction::{TopicInteractionError, TopicInteractionUseCase};
pub use vote_topic::{VoteTopicError, VoteTopicUseCase};
