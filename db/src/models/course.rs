use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::repository::Collection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Owning instructor (`users`, role instructor).
    pub instructor_id: ObjectId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// 1 (introductory) to 3 (advanced).
    pub difficulty_level: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Collection for Course {
    const NAME: &'static str = "courses";
}
