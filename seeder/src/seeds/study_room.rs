use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::{Course, StudyRoom, User, now};
use db::repository;

pub struct StudyRoomSeeder;

/// A random-size (1..=N) subset of `user_ids`, with `creator` appended if it was not drawn.
pub(crate) fn members_with_creator(
    rng: &mut SeedRng,
    user_ids: &[ObjectId],
    creator: ObjectId,
) -> Vec<ObjectId> {
    let size = rng.between(1..=user_ids.len().max(1));
    let mut members = rng.sample(user_ids, size);
    if !members.contains(&creator) {
        members.push(creator);
    }
    members
}

#[async_trait::async_trait]
impl Seeder for StudyRoomSeeder {
    fn name(&self) -> &'static str {
        "Study Rooms"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let courses = repository::find_ids(store, Course::NAME, doc! {}).await?;
        require(&courses, "courses", "courses")?;
        let user_ids = repository::find_ids(store, User::NAME, doc! {}).await?;
        require(&user_ids, "users", "users")?;

        let created = now();
        let mut rooms = Vec::with_capacity(count);
        for _ in 0..count {
            let (Some(&course), Some(&creator)) = (rng.pick(&courses), rng.pick(&user_ids)) else {
                break;
            };

            rooms.push(StudyRoom {
                id: ObjectId::new(),
                course_id: course,
                creator_id: creator,
                members_list: members_with_creator(rng, &user_ids, creator),
                title: rng.catch_phrase(),
                description: rng.paragraph(),
                created_at: created,
                updated_at: created,
            });
        }

        Ok(repository::insert_many(store, &rooms).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::fixtures;
    use db::models::user::Role;
    use db::test_utils::MemoryStore;
    use std::collections::HashSet;

    #[tokio::test]
    async fn fails_without_courses() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::users_with_roles(&store, &[Role::Student]).await;

        let err = StudyRoomSeeder.seed(&store, &mut rng, 3).await.unwrap_err();

        assert!(matches!(err, SeedError::MissingPrerequisite { collection: "courses", .. }));
        assert_eq!(store.count("studyrooms"), 0);
    }

    #[tokio::test]
    async fn creator_is_always_a_member() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::curriculum(&store, &mut rng).await;
        let user_ids: HashSet<ObjectId> =
            fixtures::all::<User>(&store).into_iter().map(|u| u.id).collect();

        StudyRoomSeeder.seed(&store, &mut rng, 50).await.unwrap();

        let rooms: Vec<StudyRoom> = fixtures::all(&store);
        assert_eq!(rooms.len(), 50);
        for room in rooms {
            assert!(room.members_list.contains(&room.creator_id));
            assert!(!room.members_list.is_empty());
            assert!(room.members_list.iter().all(|m| user_ids.contains(m)));
            let distinct: HashSet<&ObjectId> = room.members_list.iter().collect();
            assert_eq!(distinct.len(), room.members_list.len());
        }
    }

    #[test]
    fn creator_appended_when_not_sampled() {
        let mut rng = fixtures::rng();
        let users: Vec<ObjectId> = (0..20).map(|_| ObjectId::new()).collect();
        let outsider = ObjectId::new();

        let members = members_with_creator(&mut rng, &users, outsider);

        assert_eq!(members.last(), Some(&outsider));
        assert!(members.len() >= 2);
    }
}
