use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::repository::Collection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomMessage {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub course_id: ObjectId,
    pub room_id: ObjectId,
    pub sender_id: ObjectId,
    /// Message this one replies to. Replies are one level deep.
    pub parent_id: Option<ObjectId>,
    pub content: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Collection for RoomMessage {
    const NAME: &'static str = "roommessages";
}
