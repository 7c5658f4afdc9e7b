use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use crate::seeds::maybe_reply_to;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::{ThreadMessage, ThreadMessageReply, User};
use db::repository;

/// Replies to thread messages.
///
/// Like room messages, about half of a batch answer an earlier reply when
/// any exist; the earlier reply may belong to a different thread message.
pub struct ThreadMessageReplySeeder;

#[async_trait::async_trait]
impl Seeder for ThreadMessageReplySeeder {
    fn name(&self) -> &'static str {
        "Thread Message Replies"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let messages = repository::find_ids(store, ThreadMessage::NAME, doc! {}).await?;
        require(&messages, "threadmessages", "thread messages")?;
        let users = repository::find_ids(store, User::NAME, doc! {}).await?;
        require(&users, "users", "users")?;
        let existing = repository::find_ids(store, ThreadMessageReply::NAME, doc! {}).await?;

        let mut replies = Vec::with_capacity(count);
        for _ in 0..count {
            let (Some(&message), Some(&sender)) = (rng.pick(&messages), rng.pick(&users)) else {
                break;
            };

            replies.push(ThreadMessageReply {
                id: ObjectId::new(),
                message_id: message,
                sender_id: sender,
                parent_id: maybe_reply_to(rng, &existing),
                content: rng.sentence(),
                created_at: rng.date_time_this_year(),
                updated_at: rng.date_time_this_year(),
            });
        }

        Ok(repository::insert_many(store, &replies).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::fixtures;
    use db::test_utils::MemoryStore;

    #[tokio::test]
    async fn fails_without_thread_messages() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::curriculum(&store, &mut rng).await;

        let err = ThreadMessageReplySeeder.seed(&store, &mut rng, 4).await.unwrap_err();

        assert!(matches!(
            err,
            SeedError::MissingPrerequisite { collection: "threadmessages", .. }
        ));
        assert_eq!(store.count("threadmessagereplies"), 0);
    }

    #[tokio::test]
    async fn replies_point_at_messages_and_earlier_replies() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::campus(&store, &mut rng).await;
        let message_ids: Vec<ObjectId> = fixtures::all::<ThreadMessage>(&store)
            .into_iter()
            .map(|m| m.id)
            .collect();

        let first = ThreadMessageReplySeeder.seed(&store, &mut rng, 10).await.unwrap();
        let second = ThreadMessageReplySeeder.seed(&store, &mut rng, 40).await.unwrap();

        let replies: Vec<ThreadMessageReply> = fixtures::all(&store);
        assert_eq!(replies.len(), 50);
        for reply in &replies {
            assert!(message_ids.contains(&reply.message_id));
            if first.contains(&reply.id) {
                assert!(reply.parent_id.is_none());
            }
            if let Some(parent) = reply.parent_id {
                assert!(second.contains(&reply.id));
                assert!(first.contains(&parent));
            }
        }
    }
}
