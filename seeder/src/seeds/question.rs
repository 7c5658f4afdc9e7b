use crate::error::SeedError;
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::DocumentStore;
use db::bson::oid::ObjectId;
use db::models::Question;
use db::models::question::QuestionType;
use db::repository;
use strum::VariantArray;

pub struct QuestionSeeder;

/// Four distinct one-word options; repeats from the word list get a numeric suffix.
fn mcq_choices(rng: &mut SeedRng) -> Vec<String> {
    let mut choices: Vec<String> = Vec::with_capacity(QuestionType::MCQ_CHOICES);
    while choices.len() < QuestionType::MCQ_CHOICES {
        let mut word = rng.word();
        if choices.contains(&word) {
            word = format!("{word}{}", choices.len() + 1);
        }
        choices.push(word);
    }
    choices
}

pub(crate) fn build_question(rng: &mut SeedRng, question_type: QuestionType) -> Question {
    let choices = match question_type {
        QuestionType::Mcq => mcq_choices(rng),
        QuestionType::TrueFalse => QuestionType::TRUE_FALSE_CHOICES
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };
    let right_choice = rng.pick(&choices).cloned().unwrap_or_default();

    Question {
        id: ObjectId::new(),
        question: rng.sentence(),
        choices,
        right_choice,
        difficulty: rng.between_i32(1..=3),
        question_type,
        created_at: rng.date_time_this_year(),
    }
}

#[async_trait::async_trait]
impl Seeder for QuestionSeeder {
    fn name(&self) -> &'static str {
        "Questions"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let questions: Vec<Question> = (0..count)
            .map(|_| {
                let question_type = *rng.pick(QuestionType::VARIANTS).unwrap_or(&QuestionType::Mcq);
                build_question(rng, question_type)
            })
            .collect();

        Ok(repository::insert_many(store, &questions).await?)
    }
}
