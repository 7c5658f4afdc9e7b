use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::{Thread, ThreadMessage, User};
use db::repository;

pub struct ThreadMessageSeeder;

#[async_trait::async_trait]
impl Seeder for ThreadMessageSeeder {
    fn name(&self) -> &'static str {
        "Thread Messages"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let threads = repository::find_ids(store, Thread::NAME, doc! {}).await?;
        require(&threads, "threads", "threads")?;
        let users = repository::find_ids(store, User::NAME, doc! {}).await?;
        require(&users, "users", "users")?;

        let mut messages = Vec::with_capacity(count);
        for _ in 0..count {
            let (Some(&thread), Some(&sender)) = (rng.pick(&threads), rng.pick(&users)) else {
                break;
            };

            messages.push(ThreadMessage {
                id: ObjectId::new(),
                thread_id: thread,
                sender_id: sender,
                content: rng.sentence(),
                created_at: rng.date_time_this_year(),
                updated_at: rng.date_time_this_year(),
            });
        }

        Ok(repository::insert_many(store, &messages).await?)
    }
}
