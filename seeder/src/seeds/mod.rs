pub mod content;
pub mod course;
pub mod logs;
pub mod module;
pub mod notification;
pub mod question;
pub mod question_bank;
pub mod quiz_response;
pub mod room_message;
pub mod student_course;
pub mod study_room;
pub mod thread;
pub mod thread_message;
pub mod thread_message_reply;
pub mod user;

use crate::rng::SeedRng;
use db::bson::oid::ObjectId;

/// Picks a reply parent from `existing` on a coin flip; never when `existing` is empty.
pub(crate) fn maybe_reply_to(rng: &mut SeedRng, existing: &[ObjectId]) -> Option<ObjectId> {
    if existing.is_empty() || !rng.coin() {
        return None;
    }
    rng.pick(existing).copied()
}
