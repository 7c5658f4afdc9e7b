use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::content::ContentType;
use db::models::user::Role;
use db::models::{Content, User, now};
use db::repository;
use strum::VariantArray;

pub struct ContentSeeder;

#[async_trait::async_trait]
impl Seeder for ContentSeeder {
    fn name(&self) -> &'static str {
        "Content"
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

        let mut contents = Vec::with_capacity(count);
        for _ in 0..count {
            let content_type = *rng.pick(ContentType::VARIANTS).unwrap_or(&ContentType::Document);
            let (content, url) = if content_type.is_inline() {
                (Some(rng.paragraph()), None)
            } else {
                (None, Some(rng.url()))
            };

            contents.push(Content {
                id: ObjectId::new(),
                title: rng.sentence(),
                description: rng.paragraph(),
                content_type,
                is_visible: rng.coin(),
                content,
                url,
                upload_date: rng.date_time_this_year(),
                last_updated: now(),
            });
        }

        Ok(repository::insert_many(store, &contents).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::fixtures;
    use db::bson;
    use db::test_utils::MemoryStore;

    #[tokio::test]
    async fn assignments_are_inline_everything_else_is_a_link() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::users_with_roles(&store, &[Role::Instructor]).await;

        let ids = ContentSeeder.seed(&store, &mut rng, 60).await.unwrap();
        assert_eq!(ids.len(), 60);

        for content in fixtures::all::<Content>(&store) {
            if content.content_type == ContentType::Assignment {
                assert!(content.content.is_some());
                assert!(content.url.is_none());
            } else {
                assert!(content.content.is_none());
                assert!(content.url.as_deref().unwrap().starts_with("https://"));
            }
        }
    }

    #[tokio::test]
    async fn fails_without_instructors() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::users_with_roles(&store, &[Role::Student]).await;

        let err = ContentSeeder.seed(&store, &mut rng, 3).await.unwrap_err();

        assert!(matches!(
            err,
            SeedError::MissingPrerequisite { collection: "users", what: "instructors" }
        ));
        assert_eq!(store.count("contents"), 0);
    }

    #[tokio::test]
    async fn instructors_written_by_the_application_count() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        let instructor = bson::doc! {
            "name": "Grace",
            "email": "grace@example.com",
            "role": "instructor",
            "preferences": [],
            "isEmailVerified": false,
        };
        store.insert_many("users", vec![instructor]).await.unwrap();

        ContentSeeder.seed(&store, &mut rng, 3).await.unwrap();

        assert_eq!(store.count("contents"), 3);
    }
}
