use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::repository::Collection;

/// Enrollment of a student in a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentCourse {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub course_id: ObjectId,
    /// 0.0 to 100.0, two decimals.
    pub completion_percentage: f64,
    #[serde(default)]
    pub last_accessed: Vec<DateTime>,
}

impl Collection for StudentCourse {
    const NAME: &'static str = "studentcourses";
}
