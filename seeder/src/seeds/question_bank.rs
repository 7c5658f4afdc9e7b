use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::{Module, Question, QuestionBank, now};
use db::repository;

/// One question bank per module, each holding up to 40 distinct questions.
pub struct QuestionBankSeeder;

#[async_trait::async_trait]
impl Seeder for QuestionBankSeeder {
    fn name(&self) -> &'static str {
        "Question Banks"
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
        let modules = repository::find_ids(store, Module::NAME, doc! {}).await?;
        require(&modules, "moduleentities", "modules")?;

        let question_ids = repository::find_ids(store, Question::NAME, doc! {}).await?;
        require(&question_ids, "questions", "questions")?;

        let created = now();
        let banks: Vec<QuestionBank> = modules
            .iter()
            .map(|&module| QuestionBank {
                id: ObjectId::new(),
                module_id: module,
                questions: rng.sample(&question_ids, QuestionBank::MAX_QUESTIONS),
                created_at: created,
                updated_at: created,
            })
            .collect();

        Ok(repository::insert_many(store, &banks).await?)
    }
}
