use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::repository::Collection;

/// The pool of questions a module's quizzes draw from. One per module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub module_id: ObjectId,
    pub questions: Vec<ObjectId>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}

impl QuestionBank {
    pub const MAX_QUESTIONS: usize = 40;
}

impl Collection for QuestionBank {
    const NAME: &'static str = "questionbanks";
}
