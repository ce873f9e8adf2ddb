//! Random value provider.
//!
//! `ValueProvider` is the seam the generator draws every random value
//! through. `FakeProvider` backs it with the `fake` crate and a seedable RNG,
//! so the same seed always yields the same fixtures.

use crate::vocab::GENRES;
use chrono::{Days, NaiveDate};
use fake::faker::address::en::CountryCode;
use fake::faker::lorem::en::{Paragraph, Word};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of realistic random values
pub trait ValueProvider {
    /// A single lorem word
    fn word(&mut self) -> String;

    /// `count` lorem words separated by single spaces
    fn words(&mut self, count: usize) -> String {
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            words.push(self.word());
        }
        words.join(" ")
    }

    /// A short paragraph of lorem sentences
    fn paragraph(&mut self) -> String;

    /// A person's full name
    fn full_name(&mut self) -> String;

    /// A genre name
    fn genre(&mut self) -> String;

    /// An ISO 3166-1 alpha-2 country code
    fn country_code(&mut self) -> String;

    /// A date within the year before `reference`
    fn past_date(&mut self, reference: NaiveDate) -> NaiveDate;

    /// Integer in `min..=max`
    fn int_range(&mut self, min: i64, max: i64) -> i64;

    /// Boolean with given probability of true
    fn bool_with_probability(&mut self, probability: f64) -> bool;

    /// Uniformly pick one entry of a non-empty vocabulary
    fn pick(&mut self, items: &'static [&'static str]) -> &'static str;
}

/// `ValueProvider` backed by the `fake` crate
pub struct FakeProvider<R: Rng> {
    rng: R,
}

impl FakeProvider<ChaCha8Rng> {
    /// Deterministic provider for a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> FakeProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ValueProvider for FakeProvider<R> {
    fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    fn paragraph(&mut self) -> String {
        Paragraph(3..4).fake_with_rng(&mut self.rng)
    }

    fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    fn genre(&mut self) -> String {
        self.pick(GENRES).to_string()
    }

    fn country_code(&mut self) -> String {
        CountryCode().fake_with_rng(&mut self.rng)
    }

    fn past_date(&mut self, reference: NaiveDate) -> NaiveDate {
        let days_back = self.rng.random_range(1..=365);
        reference
            .checked_sub_days(Days::new(days_back))
            .unwrap_or(reference)
    }

    fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    fn bool_with_probability(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability)
    }

    fn pick(&mut self, items: &'static [&'static str]) -> &'static str {
        items[self.rng.random_range(0..items.len())]
    }
}
