use crate::error::SeedError;
use crate::rng::SeedRng;
use crate::seed::Seeder;
use db::DocumentStore;
use db::bson::oid::ObjectId;
use db::models::User;
use db::models::user::Role;
use db::repository;
use strum::VariantArray;

/// bcrypt hash of "password123", shared by every seeded account.
pub const PASSWORD_HASH: &str = "$2a$10$4Kn3uDxmhW.MEFPtQYcC9eUXTW3sv3z5ebFTPn9vUBpcoEM5br/OK";

pub struct UserSeeder;

pub(crate) fn build_user(rng: &mut SeedRng, role: Role) -> User {
    let preferences = (0..rng.between(1..=5)).map(|_| rng.word()).collect();

    User {
        id: ObjectId::new(),
        name: rng.name(),
        email: rng.email(),
        password: PASSWORD_HASH.to_string(),
        role,
        created_at: rng.date_time_this_year(),
        preferences,
        is_email_verified: true,
        email_verification_otp: None,
        email_verification_otp_created_at: None,
        email_verification_otp_expires_at: None,
        ratings: (role == Role::Instructor).then(|| User::EMPTY_RATINGS.to_vec()),
    }
}

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    fn name(&self) -> &'static str {
        "Users"
    }

    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError> {
        let users: Vec<User> = (0..count)
            .map(|_| {
                let role = *rng.pick(Role::VARIANTS).unwrap_or(&Role::Student);
                build_user(rng, role)
            })
            .collect();

        Ok(repository::insert_many(store, &users).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::fixtures;
    use db::test_utils::MemoryStore;

    #[tokio::test]
    async fn inserts_requested_number_in_one_batch() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();

        let ids = UserSeeder.seed(&store, &mut rng, 10).await.unwrap();

        assert_eq!(ids.len(), 10);
        assert_eq!(store.writes(), vec![("users".to_string(), 10)]);

        let users: Vec<User> = fixtures::all(&store);
        let stored: Vec<ObjectId> = users.iter().map(|u| u.id).collect();
        assert_eq!(stored, ids);
    }

    #[tokio::test]
    async fn only_instructors_carry_ratings() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();

        UserSeeder.seed(&store, &mut rng, 30).await.unwrap();

        for user in fixtures::all::<User>(&store) {
            assert!(user.is_email_verified);
            assert!(user.email_verification_otp.is_none());
            assert!((1..=5).contains(&user.preferences.len()));
            match user.role {
                Role::Instructor => assert_eq!(user.ratings, Some(vec![0; 5])),
                Role::Student => assert!(user.ratings.is_none()),
            }
        }
    }

    #[tokio::test]
    async fn zero_count_writes_nothing() {
        let store = MemoryStore::new();
        let mut rng = fixtures::rng();

        let ids = UserSeeder.seed(&store, &mut rng, 0).await.unwrap();

        assert!(ids.is_empty());
        assert!(store.writes().is_empty());
    }
}
