use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::user::Role;
use db::models::{Course, User, now};
use db::repository;

pub struct CourseSeeder;

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    fn name(&self) -> &'static str {
        "Courses"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let instructors = repository::find_ids(
            store,
            User::NAME,
            doc! { "role": Role::Instructor.to_string() },
        )
        .await?;
        require(&instructors, "users", "instructors")?;
        log::debug!("Drawing course owners from {} instructors", instructors.len());

        let created = now();
        let mut courses = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(&instructor) = rng.pick(&instructors) else { break };
            courses.push(Course {
                id: ObjectId::new(),
                instructor_id: instructor,
                title: rng.catch_phrase(),
                description: rng.sentence(),
                category: rng.word(),
                difficulty_level: rng.between_i32(1..=3),
                created_at: created,
                updated_at: created,
            });
        }

        Ok(repository::insert_many(store, &courses).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{fixtures, user::UserSeeder};
    use db::test_utils::MemoryStore;

    #[tokio::test]
    async fn fails_without_instructors_and_writes_nothing() {
        let store = MemoryStore::new();
        fixtures::users_with_roles(&store, &[Role::Student, Role::Student]).await;
        let writes_before = store.writes().len();
        let mut rng = fixtures::rng();

        let err = CourseSeeder.seed(&store, &mut rng, 10).await.unwrap_err();

        assert!(matches!(
            err,
            SeedError::MissingPrerequisite { collection: "users", what: "instructors" }
        ));
        assert_eq!(store.writes().len(), writes_before);
        assert_eq!(store.count("courses"), 0);
    }

    #[tokio::test]
    async fn courses_reference_instructors_only() {
        let store = MemoryStore::new();
        let users = fixtures::users_with_roles(
            &store,
            &[Role::Student, Role::Instructor, Role::Student, Role::Instructor],
        )
        .await;
        let mut rng = fixtures::rng();

        let ids = CourseSeeder.seed(&store, &mut rng, 10).await.unwrap();

        assert_eq!(ids.len(), 10);
        let instructor_ids: Vec<ObjectId> = users
            .iter()
            .filter(|u| u.role == Role::Instructor)
            .map(|u| u.id)
            .collect();
        for course in fixtures::all::<Course>(&store) {
            assert!(instructor_ids.contains(&course.instructor_id));
            assert!((1..=3).contains(&course.difficulty_level));
            assert_eq!(course.created_at, course.updated_at);
        }
    }

    #[tokio::test]
    async fn ten_users_then_ten_courses() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();

        let user_ids = UserSeeder.seed(&store, &mut rng, 10).await.unwrap();
        let users: Vec<User> = fixtures::all(&store);
        let has_instructor = users.iter().any(|u| u.role == Role::Instructor);

        let result = CourseSeeder.seed(&store, &mut rng, 10).await;

        if has_instructor {
            let course_ids = result.unwrap();
            assert_eq!(course_ids.len(), 10);
            for course in fixtures::all::<Course>(&store) {
                assert!(user_ids.contains(&course.instructor_id));
                let owner = users.iter().find(|u| u.id == course.instructor_id).unwrap();
                assert_eq!(owner.role, Role::Instructor);
            }
        } else {
            assert!(matches!(result, Err(SeedError::MissingPrerequisite { .. })));
        }
    }
}
