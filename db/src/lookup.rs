//! Read-side projections used for foreign-key snapshots.
//!
//! Existing collections may hold documents the application wrote itself, with
//! roles, enum values and field shapes the seeder never produces. A projection
//! only names the linking fields a seeder samples, so everything else on those
//! documents is ignored.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::models::{Module, Question, QuestionBank, StudentCourse};
use crate::repository::Collection;

pub trait Projection: DeserializeOwned + Send {
    const COLLECTION: &'static str;
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModuleRef {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub course_id: ObjectId,
}

impl Projection for ModuleRef {
    const COLLECTION: &'static str = Module::NAME;
}

#[derive(Debug, Clone, Deserialize)]
pub struct BankRef {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub module_id: ObjectId,
    #[serde(default)]
    pub questions: Vec<ObjectId>,
}

impl Projection for BankRef {
    const COLLECTION: &'static str = QuestionBank::NAME;
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRef {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub right_choice: String,
    #[serde(default)]
    pub choices: Vec<String>,
}

impl QuestionRef {
    /// Every choice except the right one.
    pub fn wrong_choices(&self) -> Vec<&String> {
        self.choices
            .iter()
            .filter(|choice| **choice != self.right_choice)
            .collect()
    }
}

impl Projection for QuestionRef {
    const COLLECTION: &'static str = Question::NAME;
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentRef {
    pub user_id: ObjectId,
    pub course_id: ObjectId,
}

impl Projection for EnrollmentRef {
    const COLLECTION: &'static str = StudentCourse::NAME;
}
