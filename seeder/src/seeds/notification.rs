use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::notification::NotificationType;
use db::models::{Notification, User};
use db::repository;
use strum::VariantArray;

pub struct NotificationSeeder;

#[async_trait::async_trait]
impl Seeder for NotificationSeeder {
    fn name(&self) -> &'static str {
        "Notifications"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let users = repository::find_ids(store, User::NAME, doc! {}).await?;
        require(&users, "users", "users")?;

        let mut notifications = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(&user) = rng.pick(&users) else { break };

            notifications.push(Notification {
                id: ObjectId::new(),
                user_id: user,
                title: rng.sentence(),
                message: rng.paragraph(),
                notification_type: *rng
                    .pick(NotificationType::VARIANTS)
                    .unwrap_or(&NotificationType::Info),
                created_at: rng.date_time_this_year(),
                updated_at: rng.date_time_this_year(),
            });
        }

        Ok(repository::insert_many(store, &notifications).await?)
    }
}
