use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::repository::Collection;

/// A course-scoped group chat. The creator is always a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyRoom {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub course_id: ObjectId,
    pub creator_id: ObjectId,
    pub members_list: Vec<ObjectId>,
    pub title: String,
    pub description: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Collection for StudyRoom {
    const NAME: &'static str = "studyrooms";
}
