use crate::error::SeedError;
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::log::LogType;
use db::models::{Log, User};
use db::repository;
use strum::VariantArray;

/// Audit log entries. Roughly half name a user; the rest are anonymous, and
/// all are anonymous when there are no users yet.
pub struct LogSeeder;

#[async_trait::async_trait]
impl Seeder for LogSeeder {
    fn name(&self) -> &'static str {
        "Logs"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let user_ids = repository::find_ids(store, User::NAME, doc! {}).await?;
        if user_ids.is_empty() {
            log::debug!("No users yet; every log entry will be anonymous");
        }

        let mut logs = Vec::with_capacity(count);
        for _ in 0..count {
            let user_id = if rng.coin() { rng.pick(&user_ids).copied() } else { None };

            logs.push(Log {
                id: ObjectId::new(),
                user_id,
                event: rng.sentence(),
                timestamp: rng.date_time_this_year(),
                status: *rng.pick(&Log::STATUSES).unwrap_or(&200),
                log_type: *rng.pick(LogType::VARIANTS).unwrap_or(&LogType::General),
                ip: rng.ipv4(),
            });
        }

        Ok(repository::insert_many(store, &logs).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::fixtures;
    use db::models::user::Role;
    use db::test_utils::MemoryStore;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn works_without_users() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();

        LogSeeder.seed(&store, &mut rng, 10).await.unwrap();

        let logs: Vec<Log> = fixtures::all(&store);
        assert_eq!(logs.len(), 10);
        assert!(logs.iter().all(|l| l.user_id.is_none()));
    }

    #[tokio::test]
    async fn mixes_anonymous_and_attributed_entries() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        let users = fixtures::users_with_roles(&store, &[Role::Student, Role::Instructor]).await;

        LogSeeder.seed(&store, &mut rng, 80).await.unwrap();

        let logs: Vec<Log> = fixtures::all(&store);
        let attributed = logs.iter().filter(|l| l.user_id.is_some()).count();
        assert!(attributed > 0 && attributed < logs.len());
        for entry in &logs {
            if let Some(user_id) = entry.user_id {
                assert!(users.iter().any(|u| u.id == user_id));
            }
            assert!(Log::STATUSES.contains(&entry.status));
            assert!(entry.ip.parse::<Ipv4Addr>().is_ok());
        }
    }
}
