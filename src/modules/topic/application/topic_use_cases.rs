use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicUseCase, ListNodeTopicsUseCase,
    ListTopicsUseCase, ListUserInteractionTopicsUseCase, ListUserTopicsUseCase,
    TopicInteractionUseCase, VoteTopicUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub list: Arc<dyn ListTopicsUseCase + Send + Sync>,
    pub list_by_user: Arc<dyn ListUserTopicsUseCase + Send + Sync>,
    pub list_by_node: Arc<dyn ListNodeTopicsUseCase + Send + Sync>,
    pub list_user_interactions: Arc<dyn ListUserInteractionTopicsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub get: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub vote: Arc<dyn VoteTopicUseCase + Send + Sync>,
    pub interaction: Arc<dyn TopicInteractionUseCase + Send + Sync>,
}
