use crate::error::{SeedError, require};
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::{Collection, DocumentStore};
use db::bson::{doc, oid::ObjectId};
use db::models::user::Role;
use db::models::{Course, StudentCourse, User};
use db::repository;

/// Enrolls random students in random courses.
pub struct StudentCourseSeeder;

#[async_trait::async_trait]
impl Seeder for StudentCourseSeeder {
    fn name(&self) -> &'static str {
        "Student Courses"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let students =
            repository::find_ids(store, User::NAME, doc! { "role": Role::Student.to_string() })
                .await?;
        require(&students, "users", "students")?;
        let courses = repository::find_ids(store, Course::NAME, doc! {}).await?;
        require(&courses, "courses", "courses")?;

        let mut enrollments = Vec::with_capacity(count);
        for _ in 0..count {
            let (Some(&student), Some(&course)) = (rng.pick(&students), rng.pick(&courses)) else {
                break;
            };
            let last_accessed = if rng.coin() {
                (0..rng.between(1..=5))
                    .map(|_| rng.date_time_this_year())
                    .collect()
            } else {
                Vec::new()
            };

            enrollments.push(StudentCourse {
                id: ObjectId::new(),
                user_id: student,
                course_id: course,
                completion_percentage: rng.percentage(),
                last_accessed,
            });
        }

        Ok(repository::insert_many(store, &enrollments).await?)
    }
}
