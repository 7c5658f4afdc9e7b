use std::collections::HashMap;

use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::DocumentStore;
use db::bson::{doc, oid::ObjectId};
use db::lookup::{BankRef, EnrollmentRef, ModuleRef, QuestionRef};
use db::models::QuizResponse;
use db::models::quiz_response::{self, FinalGrade};
use db::repository;

/// Quiz attempts by enrolled students on modules of their own course.
///
/// An attempt whose course has no modules, or whose module has no question
/// bank, is skipped without a replacement, so fewer than `count` responses
/// may be written.
pub struct QuizResponseSeeder;

pub const QUESTIONS_PER_QUIZ: usize = 10;

/// Answers `questions`, each correct with probability one half.
///
/// Returns the answers in question order and the number answered correctly.
pub(crate) fn answer_quiz(rng: &mut SeedRng, questions: &[&QuestionRef]) -> (Vec<String>, usize) {
    let mut correct = 0;
    let answers = questions
        .iter()
        .map(|question| {
            let wrong = question.wrong_choices();
            if rng.coin() || wrong.is_empty() {
                correct += 1;
                question.right_choice.clone()
            } else {
                rng.pick(&wrong)
                    .map(|choice| choice.to_string())
                    .unwrap_or_default()
            }
        })
        .collect();
    (answers, correct)
}

#[async_trait::async_trait]
impl Seeder for QuizResponseSeeder {
    fn name(&self) -> &'static str {
        "Quiz Responses"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let enrollments: Vec<EnrollmentRef> = repository::find_projected(store, doc! {}).await?;
        require(&enrollments, "studentcourses", "student enrollments")?;
        let modules: Vec<ModuleRef> = repository::find_projected(store, doc! {}).await?;
        require(&modules, "moduleentities", "modules")?;
        let banks: Vec<BankRef> = repository::find_projected(store, doc! {}).await?;
        require(&banks, "questionbanks", "question banks")?;
        let questions: Vec<QuestionRef> = repository::find_projected(store, doc! {}).await?;
        require(&questions, "questions", "questions")?;

        log::debug!(
            "Quiz snapshot: {} enrollments, {} modules, {} banks, {} questions",
            enrollments.len(),
            modules.len(),
            banks.len(),
            questions.len()
        );

        let mut modules_by_course: HashMap<ObjectId, Vec<&ModuleRef>> = HashMap::new();
        for module in &modules {
            modules_by_course.entry(module.course_id).or_default().push(module);
        }
        // First bank wins when a module somehow has several.
        let mut bank_by_module: HashMap<ObjectId, &BankRef> = HashMap::new();
        for bank in &banks {
            bank_by_module.entry(bank.module_id).or_insert(bank);
        }
        let question_by_id: HashMap<ObjectId, &QuestionRef> =
            questions.iter().map(|q| (q.id, q)).collect();

        let mut responses = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(enrollment) = rng.pick(&enrollments) else { break };

            let Some(module) = modules_by_course
                .get(&enrollment.course_id)
                .and_then(|course_modules| rng.pick(course_modules))
            else {
                log::warn!("Skipping quiz response: course {} has no modules", enrollment.course_id);
                continue;
            };
            let Some(bank) = bank_by_module.get(&module.id) else {
                log::warn!("Skipping quiz response: module {} has no question bank", module.id);
                continue;
            };

            let sampled: Vec<&QuestionRef> = rng
                .sample(&bank.questions, QUESTIONS_PER_QUIZ)
                .iter()
                .filter_map(|id| question_by_id.get(id).copied())
                .collect();
            if sampled.is_empty() {
                log::warn!("Skipping quiz response: bank {} has no resolvable questions", bank.id);
                continue;
            }

            let (answers, correct) = answer_quiz(rng, &sampled);
            let score = quiz_response::score(correct, sampled.len());

            responses.push(QuizResponse {
                id: ObjectId::new(),
                user_id: enrollment.user_id,
                module_id: module.id,
                questions: sampled.iter().map(|q| q.id).collect(),
                answers,
                score,
                final_grade: FinalGrade::from_score(score),
            });
        }

        if responses.len() < count {
            log::info!(
                "Generated {} of {} requested quiz responses",
                responses.len(),
                count
            );
        }

        Ok(repository::insert_many(store, &responses).await?)
    }
}
