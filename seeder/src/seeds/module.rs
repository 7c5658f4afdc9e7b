use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::module::AssessmentType;
use db::models::{Content, Course, Module};
use db::repository;
use strum::VariantArray;

/// Gives every existing course between one and three modules.
pub struct ModuleSeeder;

const MODULES_PER_COURSE: std::ops::RangeInclusive<usize> = 1..=3;
const CONTENT_PER_MODULE: std::ops::RangeInclusive<usize> = 1..=3;

#[async_trait::async_trait]
impl Seeder for ModuleSeeder {
    fn name(&self) -> &'static str {
        "Modules"
    }

    fn takes_count(&self) -> bool {
        false
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        _count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let courses = repository::find_ids(store, Course::NAME, doc! {}).await?;
        require(&courses, "courses", "courses")?;

        let content_ids = repository::find_ids(store, Content::NAME, doc! {}).await?;
        require(&content_ids, "contents", "content")?;

        let mut modules = Vec::new();
        for &course in &courses {
            for _ in 0..rng.between(MODULES_PER_COURSE) {
                let attached = rng.between(CONTENT_PER_MODULE);
                modules.push(Module {
                    id: ObjectId::new(),
                    course_id: course,
                    title: rng.sentence(),
                    content: rng.sample(&content_ids, attached),
                    assessment_type: *rng
                        .pick(AssessmentType::VARIANTS)
                        .unwrap_or(&AssessmentType::Mix),
                    number_of_questions: rng.between_i32(5..=20),
                    created_at: rng.date_time_this_year(),
                });
            }
        }

        Ok(repository::insert_many(store, &modules).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{content::ContentSeeder, course::CourseSeeder, fixtures};
    use db::models::user::Role;
    use db::test_utils::MemoryStore;
    use std::collections::HashMap;

    #[tokio::test]
    async fn fails_without_courses() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::users_with_roles(&store, &[Role::Instructor]).await;
        ContentSeeder.seed(&store, &mut rng, 5).await.unwrap();

        let err = ModuleSeeder.seed(&store, &mut rng, 0).await.unwrap_err();

        assert!(matches!(err, SeedError::MissingPrerequisite { collection: "courses", .. }));
        assert_eq!(store.count("moduleentities"), 0);
    }

    #[tokio::test]
    async fn fails_without_content() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::users_with_roles(&store, &[Role::Instructor]).await;
        CourseSeeder.seed(&store, &mut rng, 3).await.unwrap();

        let err = ModuleSeeder.seed(&store, &mut rng, 0).await.unwrap_err();

        assert!(matches!(err, SeedError::MissingPrerequisite { collection: "contents", .. }));
        assert!(store.writes().iter().all(|(c, _)| c != "moduleentities"));
    }

    #[tokio::test]
    async fn every_course_gets_one_to_three_modules_with_valid_content() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();
        fixtures::users_with_roles(&store, &[Role::Instructor]).await;
        CourseSeeder.seed(&store, &mut rng, 8).await.unwrap();
        let content_ids = ContentSeeder.seed(&store, &mut rng, 2).await.unwrap();

        ModuleSeeder.seed(&store, &mut rng, 0).await.unwrap();

        let courses: Vec<Course> = fixtures::all(&store);
        let modules: Vec<Module> = fixtures::all(&store);

        let mut per_course: HashMap<ObjectId, usize> = HashMap::new();
        for module in &modules {
            *per_course.entry(module.course_id).or_default() += 1;

            assert!(!module.content.is_empty());
            assert!(module.content.len() <= 3);
            assert!(module.content.iter().all(|id| content_ids.contains(id)));
            let mut unique = module.content.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), module.content.len());
            assert!((5..=20).contains(&module.number_of_questions));
        }

        assert_eq!(per_course.len(), courses.len());
        assert!(per_course.values().all(|n| (1..=3).contains(n)));
    }
}
