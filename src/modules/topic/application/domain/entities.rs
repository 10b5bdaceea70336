use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDirection::Up => "up",
            VoteDirection::Down => "down",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "up" => Some(VoteDirection::Up),
            "down" => Some(VoteDirection::Down),
            _ => None,
        }
    }
}

/// Bookmark (`Favorite`) versus follow-for-notifications (`Attention`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Favorite,
    Attention,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Favorite => "favorite",
            InteractionKind::Attention => "attention",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionToggle {
    On,
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_direction_round_trips_through_str() {
        for dir in [VoteDirection::Up, VoteDirection::Down] {
            assert_eq!(VoteDirection::parse(dir.as_str()), Some(dir));
        }
        assert_eq!(VoteDirection::parse("sideways"), None);
    }

    #[test]
    fn interaction_kind_matches_stored_values() {
        assert_eq!(InteractionKind::Favorite.as_str(), "favorite");
        assert_eq!(InteractionKind::Attention.as_str(), "attention");
    }
}
