use std::sync::Arc;

use actix_web::web;

use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicError, CreateTopicUseCase, DeleteTopicUseCase, GetTopicUseCase, ListNodeTopicsUseCase,
    ListTopicsUseCase, ListUserInteractionTopicsUseCase, ListUserTopicsUseCase,
    TopicInteractionUseCase, VoteTopicUseCase,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;

/// Every use case defaults to a harmless stub; tests swap in the one
/// they exercise.
pub struct TestAppStateBuilder {
    topic: TopicUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: TopicUseCases {
                list: Arc::new(StubListTopicsUseCase::success(vec![])),
                list_by_user: Arc::new(StubListUserTopicsUseCase::success(vec![])),
                list_by_node: Arc::new(StubListNodeTopicsUseCase::success(vec![])),
                list_user_interactions: Arc::new(StubListUserInteractionTopicsUseCase::success(
                    vec![],
                )),
                create: Arc::new(StubCreateTopicUseCase::error(
                    CreateTopicError::RepositoryError("not used in this test".to_string()),
                )),
                get: Arc::new(StubGetTopicUseCase::not_found()),
                delete: Arc::new(StubDeleteTopicUseCase::success()),
                vote: Arc::new(StubVoteTopicUseCase::outcome(None, 0)),
                interaction: Arc::new(StubTopicInteractionUseCase::success()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_topics(mut self, uc: impl ListTopicsUseCase + 'static) -> Self {
        self.topic.list = Arc::new(uc);
        self
    }

    pub fn with_list_user_topics(mut self, uc: impl ListUserTopicsUseCase + 'static) -> Self {
        self.topic.list_by_user = Arc::new(uc);
        self
    }

    pub fn with_list_node_topics(mut self, uc: impl ListNodeTopicsUseCase + 'static) -> Self {
        self.topic.list_by_node = Arc::new(uc);
        self
    }

    pub fn with_list_user_interactions(
        mut self,
        uc: impl ListUserInteractionTopicsUseCase + 'static,
    ) -> Self {
        self.topic.list_user_interactions = Arc::new(uc);
        self
    }

    pub fn with_create_topic(mut self, uc: impl CreateTopicUseCase + 'static) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + 'static) -> Self {
        self.topic.get = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(mut self, uc: impl DeleteTopicUseCase + 'static) -> Self {
        self.topic.delete = Arc::new(uc);
        self
    }

    pub fn with_vote_topic(mut self, uc: impl VoteTopicUseCase + 'static) -> Self {
        self.topic.vote = Arc::new(uc);
        self
    }

    pub fn with_topic_interaction(mut self, uc: impl TopicInteractionUseCase + 'static) -> Self {
        self.topic.interaction = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { topic: self.topic })
    }
}
