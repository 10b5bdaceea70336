pub mod nodes;
pub mod topic_interactions;
pub mod topic_votes;
pub mod topics;
