mod node_query;
mod topic_interaction_repository;
mod topic_query;
mod topic_repository;
mod topic_voter;

pub use node_query::{NodeQuery, NodeQueryError};
pub use topic_interaction_repository::{
    TopicInteractionRepository, TopicInteractionRepositoryError,
};
pub use topic_query::{
    PageRequest, PageResult, TopicAuthor, TopicFilter, TopicQuery, TopicQueryError,
    TopicQueryResult, TopicWithAuthor,
};
pub use topic_repository::{CreateTopicData, TopicRepository, TopicRepositoryError};
pub use topic_voter::{TopicVoter, TopicVoterError, VoteOutcome};
