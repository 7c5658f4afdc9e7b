use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};

use crate::repository::Collection;

/// An audit record in `logs`. Anonymous events have no `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: Option<ObjectId>,
    pub event: String,
    pub timestamp: DateTime,
    /// HTTP-style outcome code.
    pub status: i32,
    #[serde(rename = "type")]
    pub log_type: LogType,
    pub ip: String,
}

impl Log {
    pub const STATUSES: [i32; 3] = [200, 400, 500];
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogType {
    Auth,
    General,
}

impl Collection for Log {
    const NAME: &'static str = "logs";
}
