use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::repository::Collection;

/// One student's attempt at a module quiz.
///
/// `answers[i]` is the choice recorded for `questions[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResponse {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub module_id: ObjectId,
    pub questions: Vec<ObjectId>,
    pub answers: Vec<String>,
    /// Percentage of correct answers, 0 to 100.
    pub score: i32,
    #[serde(rename = "finalGrade")]
    pub final_grade: FinalGrade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FinalGrade {
    Passed,
    Failed,
}

impl FinalGrade {
    pub const PASS_MARK: i32 = 50;

    pub fn from_score(score: i32) -> Self {
        if score >= Self::PASS_MARK {
            FinalGrade::Passed
        } else {
            FinalGrade::Failed
        }
    }
}

/// Rounded percentage of `correct` out of `total`. Zero when `total` is zero.
pub fn score(correct: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as i32
}

impl Collection for QuizResponse {
    const NAME: &'static str = "quizresponses";
}
