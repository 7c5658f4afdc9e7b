use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};

use crate::repository::Collection;

/// Learning material in `contents`.
///
/// Assignments carry their text inline in `content`; every other type points
/// at an external resource through `url`. Exactly one of the two is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(rename = "isVisible")]
    pub is_visible: bool,
    pub content: Option<String>,
    pub url: Option<String>,
    pub upload_date: DateTime,
    pub last_updated: DateTime,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentType {
    Video,
    Document,
    Website,
    Assignment,
    Tutorial,
    Slides,
}

impl ContentType {
    pub fn is_inline(self) -> bool {
        matches!(self, ContentType::Assignment)
    }
}

impl Collection for Content {
    const NAME: &'static str = "contents";
}
