pub mod entities;
pub mod policy;
pub mod vote;
