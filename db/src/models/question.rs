use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};

use crate::repository::Collection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub question: String,
    pub choices: Vec<String>,
    pub right_choice: String,
    /// 1 to 3.
    pub difficulty: i32,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub created_at: DateTime,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuestionType {
    Mcq,
    TrueFalse,
}

impl QuestionType {
    pub const MCQ_CHOICES: usize = 4;
    pub const TRUE_FALSE_CHOICES: [&'static str; 2] = ["Yes", "No"];
}

impl Collection for Question {
    const NAME: &'static str = "questions";
}
