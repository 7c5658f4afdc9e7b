//! Randomness for the seeders.
//!
//! Every random decision (foreign-key picks, subset sampling, coin flips and
//! fake text) goes through one `SeedRng`, so a fixed seed reproduces a run.

use chrono::{Datelike, NaiveDate, Utc};
use db::bson;
use fake::faker::company::en::CatchPhrase;
use fake::faker::internet::en::{DomainSuffix, IPv4, SafeEmail};
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::faker::name::en::Name;
use fake::{Dummy, Fake};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

pub struct SeedRng {
    inner: StdRng,
}

impl SeedRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Uniform pick. `None` only for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Uniform sample of `amount` distinct positions (capped at `items.len()`).
    pub fn sample<T: Clone>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        items
            .choose_multiple(&mut self.inner, amount.min(items.len()))
            .cloned()
            .collect()
    }

    pub fn coin(&mut self) -> bool {
        self.inner.random_bool(0.5)
    }

    pub fn between(&mut self, range: RangeInclusive<usize>) -> usize {
        self.inner.random_range(range)
    }

    pub fn between_i32(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.inner.random_range(range)
    }

    pub fn percentage(&mut self) -> f64 {
        let raw: f64 = self.inner.random_range(0.0..=100.0);
        (raw * 100.0).round() / 100.0
    }

    /// A moment between January 1st of the current year and now.
    pub fn date_time_this_year(&mut self) -> bson::DateTime {
        let now = Utc::now();
        let start = NaiveDate::from_ymd_opt(now.year(), 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|d| d.and_utc())
            .unwrap_or(now);

        let millis = self
            .inner
            .random_range(start.timestamp_millis()..=now.timestamp_millis());
        bson::DateTime::from_millis(millis)
    }

    pub fn fake<U: Dummy<F>, F>(&mut self, faker: F) -> U {
        faker.fake_with_rng(&mut self.inner)
    }

    pub fn name(&mut self) -> String {
        self.fake(Name())
    }

    pub fn email(&mut self) -> String {
        self.fake(SafeEmail())
    }

    pub fn word(&mut self) -> String {
        self.fake(Word())
    }

    pub fn sentence(&mut self) -> String {
        self.fake(Sentence(3..8))
    }

    pub fn paragraph(&mut self) -> String {
        self.fake(Paragraph(2..5))
    }

    pub fn catch_phrase(&mut self) -> String {
        self.fake(CatchPhrase())
    }

    pub fn ipv4(&mut self) -> String {
        self.fake(IPv4())
    }

    pub fn url(&mut self) -> String {
        let host: String = self.word();
        let suffix: String = self.fake(DomainSuffix());
        let path: String = self.word();
        format!("https://www.{host}.{suffix}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeedRng::seeded(7);
        let mut b = SeedRng::seeded(7);

        assert_eq!(a.sentence(), b.sentence());
        assert_eq!(a.between(1..=1000), b.between(1..=1000));
        assert_eq!(a.sample(&[1, 2, 3, 4, 5], 3), b.sample(&[1, 2, 3, 4, 5], 3));
    }

    #[test]
    fn sample_is_capped_and_distinct() {
        let mut rng = SeedRng::seeded(1);
        let items = [10, 20, 30];

        let mut picked = rng.sample(&items, 10);
        picked.sort();

        assert_eq!(picked, vec![10, 20, 30]);
    }

    #[test]
    fn pick_on_empty_is_none() {
        let mut rng = SeedRng::seeded(1);
        let empty: [u8; 0] = [];
        assert!(rng.pick(&empty).is_none());
    }

    #[test]
    fn percentage_has_two_decimals_and_stays_in_range() {
        let mut rng = SeedRng::seeded(3);
        for _ in 0..100 {
            let p = rng.percentage();
            assert!((0.0..=100.0).contains(&p));
            assert!(((p * 100.0).round() - p * 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn dates_fall_in_the_current_year() {
        let mut rng = SeedRng::seeded(9);
        let start = NaiveDate::from_ymd_opt(Utc::now().year(), 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();

        for _ in 0..50 {
            let millis = rng.date_time_this_year().timestamp_millis();
            assert!(millis >= start);
            assert!(millis <= Utc::now().timestamp_millis());
        }
    }

    #[test]
    fn urls_look_like_urls() {
        let mut rng = SeedRng::seeded(5);
        assert!(rng.url().starts_with("https://www."));
    }
}
