pub mod content;
pub mod course;
pub mod log;
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

pub use content::Content;
pub use course::Course;
pub use self::log::Log;
pub use module::Module;
pub use notification::Notification;
pub use question::Question;
pub use question_bank::QuestionBank;
pub use quiz_response::QuizResponse;
pub use room_message::RoomMessage;
pub use student_course::StudentCourse;
pub use study_room::StudyRoom;
pub use thread::Thread;
pub use thread_message::ThreadMessage;
pub use thread_message_reply::ThreadMessageReply;
pub use user::User;

use chrono::{DateTime, Utc};
use mongodb::bson;

/// Converts a chrono timestamp into a BSON datetime (millisecond precision).
pub fn to_bson_datetime(dt: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(dt.timestamp_millis())
}

/// Current time as a BSON datetime.
pub fn now() -> bson::DateTime {
    to_bson_datetime(Utc::now())
}
