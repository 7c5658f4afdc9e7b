use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};

use crate::repository::Collection;

/// A platform account in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    /// bcrypt hash, never plain text.
    pub password: String,
    pub role: Role,
    pub created_at: DateTime,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(rename = "isEmailVerified")]
    pub is_email_verified: bool,
    #[serde(rename = "emailVerificationOtp")]
    pub email_verification_otp: Option<String>,
    #[serde(rename = "emailVerificationOtpCreatedAt")]
    pub email_verification_otp_created_at: Option<DateTime>,
    #[serde(rename = "emailVerificationOtpExpiresAt")]
    pub email_verification_otp_expires_at: Option<DateTime>,
    /// Star-rating histogram; only instructors carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Vec<i32>>,
}

/// Roles the seeder hands out. Admins are provisioned by hand, never seeded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Instructor,
    Student,
}

impl User {
    /// Initial ratings histogram for a fresh instructor (one bucket per star).
    pub const EMPTY_RATINGS: [i32; 5] = [0; 5];
}

impl Collection for User {
    const NAME: &'static str = "users";
}
