use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::repository::Collection;

/// Third level of a forum discussion: a reply to a thread message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMessageReply {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub message_id: ObjectId,
    pub sender_id: ObjectId,
    /// Earlier reply this one answers, if any.
    pub parent_id: Option<ObjectId>,
    pub content: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Collection for ThreadMessageReply {
    const NAME: &'static str = "threadmessagereplies";
}
