use super::entities::VoteDirection;

/// Result of applying a vote request on top of the caller's existing vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    /// Vote the caller holds afterwards; `None` when the vote was withdrawn.
    pub next: Option<VoteDirection>,
    /// Change to apply to the topic's `vote_count`.
    pub delta: i32,
}

impl VoteTransition {
    /// Repeating the same vote withdraws it, switching sides moves the
    /// counter by two.
    pub fn resolve(existing: Option<VoteDirection>, requested: VoteDirection) -> Self {
        use VoteDirection::{Down, Up};

        match (existing, requested) {
            (None, Up) => Self::new(Some(Up), 1),
            (Some(Up), Up) => Self::new(None, -1),
            (Some(Down), Up) => Self::new(Some(Up), 2),
            (None, Down) => Self::new(Some(Down), -1),
            (Some(Down), Down) => Self::new(None, 1),
            (Some(Up), Down) => Self::new(Some(Down), -2),
        }
    }

    fn new(next: Option<VoteDirection>, delta: i32) -> Self {
        Self { next, delta }
    }
}
