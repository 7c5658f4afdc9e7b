use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::{Course, Thread, User};
use db::repository;

pub struct ThreadSeeder;

#[async_trait::async_trait]
impl Seeder for ThreadSeeder {
    fn name(&self) -> &'static str {
        "Threads"
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

        let mut threads = Vec::with_capacity(count);
        for _ in 0..count {
            let (Some(&course), Some(&creator)) = (rng.pick(&courses), rng.pick(&users)) else {
                break;
            };

            threads.push(Thread {
                id: ObjectId::new(),
                course_id: course,
                creator_id: creator,
                title: rng.sentence(),
                description: rng.paragraph(),
                created_at: rng.date_time_this_year(),
                updated_at: rng.date_time_this_year(),
            });
        }

        Ok(repository::insert_many(store, &threads).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::fixtures;
    use db::models::user::Role;
    use db::test_utils::MemoryStore;

    #[tokio::test]
    async fn fails_without_courses() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::users_with_roles(&store, &[Role::Instructor]).await;

        let err = ThreadSeeder.seed(&store, &mut rng, 4).await.unwrap_err();

        assert!(matches!(err, SeedError::MissingPrerequisite { collection: "courses", .. }));
        assert_eq!(store.count("threads"), 0);
    }

    #[tokio::test]
    async fn threads_reference_existing_courses_and_users() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::curriculum(&store, &mut rng).await;
        let courses: Vec<Course> = fixtures::all(&store);
        let users: Vec<User> = fixtures::all(&store);

        ThreadSeeder.seed(&store, &mut rng, 15).await.unwrap();

        let threads: Vec<Thread> = fixtures::all(&store);
        assert_eq!(threads.len(), 15);
        for thread in threads {
            assert!(courses.iter().any(|c| c.id == thread.course_id));
            assert!(users.iter().any(|u| u.id == thread.creator_id));
        }
    }
}
