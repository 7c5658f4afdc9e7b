use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};

use crate::repository::Collection;

/// A unit of a course, stored in `moduleentities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub course_id: ObjectId,
    pub title: String,
    /// Ids of `contents` documents attached to this module.
    pub content: Vec<ObjectId>,
    #[serde(rename = "assessmentType")]
    pub assessment_type: AssessmentType,
    #[serde(rename = "numberOfQuestions")]
    pub number_of_questions: i32,
    pub created_at: DateTime,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AssessmentType {
    Mcq,
    TrueFalse,
    Mix,
}

impl Collection for Module {
    const NAME: &'static str = "moduleentities";
}
