use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use crate::seeds::maybe_reply_to;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::{Course, RoomMessage, StudyRoom, User, now};
use db::repository;

/// Chat messages in study rooms.
///
/// About half become replies when the collection already holds messages.
/// The parent is drawn from every existing message, not only those of the
/// same room.
pub struct RoomMessageSeeder;

#[async_trait::async_trait]
impl Seeder for RoomMessageSeeder {
    fn name(&self) -> &'static str {
        "Room Messages"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let courses = repository::find_ids(store, Course::NAME, doc! {}).await?;
        require(&courses, "courses", "courses")?;
        let users = repository::find_ids(store, User::NAME, doc! {}).await?;
        require(&users, "users", "users")?;
        let rooms = repository::find_ids(store, StudyRoom::NAME, doc! {}).await?;
        require(&rooms, "studyrooms", "study rooms")?;
        let existing = repository::find_ids(store, RoomMessage::NAME, doc! {}).await?;

        let created = now();
        let mut messages = Vec::with_capacity(count);
        for _ in 0..count {
            let (Some(&course), Some(&room), Some(&sender)) =
                (rng.pick(&courses), rng.pick(&rooms), rng.pick(&users))
            else {
                break;
            };

            messages.push(RoomMessage {
                id: ObjectId::new(),
                course_id: course,
                room_id: room,
                sender_id: sender,
                parent_id: maybe_reply_to(rng, &existing),
                content: rng.sentence(),
                created_at: created,
                updated_at: created,
            });
        }

        Ok(repository::insert_many(store, &messages).await?)
    }
}
