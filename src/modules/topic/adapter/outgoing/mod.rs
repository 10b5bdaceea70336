mod node_query_postgres;
pub mod sea_orm_entity;
mod topic_interaction_repository_postgres;
mod topic_query_postgres;
mod topic_repository_postgres;
mod topic_voter_postgres;

pub use node_query_postgres::NodeQueryPostgres;
pub use topic_interaction_repository_postgres::TopicInteractionRepositoryPostgres;
pub use topic_query_postgres::TopicQueryPostgres;
pub use topic_repository_postgres::TopicRepositoryPostgres;
pub use topic_voter_postgres::TopicVoterPostgres;
