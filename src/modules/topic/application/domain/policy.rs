use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Who may act on an existing topic.
pub struct TopicPolicy;

impl TopicPolicy {
    /// Owners may delete their own topics, moderators may delete any.
    pub fn can_delete(actor: UserId, actor_is_moderator: bool, topic_owner: Uuid) -> bool {
        actor_is_moderator || actor.value() == topic_owner
    }
}
