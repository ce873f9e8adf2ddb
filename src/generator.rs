//! Record generator: produces one raw record per index.
//!
//! Generates deterministic data for a seed and reference date. Each case
//! policy has its own operation; `record` dispatches on the plan.

use crate::dataset::Dataset;
use crate::policy::{CaseKind, CasePlan};
use crate::provider::ValueProvider;
use crate::vocab::ROLES;
use chrono::{Datelike, NaiveDate};

pub const MIN_RUNTIME: u32 = 30;
pub const MAX_RUNTIME: u32 = 200;
pub const POSITIVE_GENRES: usize = 2;
pub const EDGE_TITLE_WORDS: usize = 200;
pub const EDGE_DESCRIPTION_WORDS: usize = 500;
pub const EDGE_NAME_WORDS: usize = 100;
pub const EDGE_GENRES: usize = 30;

/// One generated record before it is split into a title and a credit row
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub runtime: Option<u32>,
    pub genres: Vec<String>,
    pub real_name: String,
    pub character_name: String,
    pub role: String,
}

/// Fixture generator
pub struct Generator<P: ValueProvider> {
    provider: P,
    plan: CasePlan,
    reference_date: NaiveDate,
}

impl<P: ValueProvider> Generator<P> {
    pub fn new(provider: P, plan: CasePlan, reference_date: NaiveDate) -> Self {
        Self {
            provider,
            plan,
            reference_date,
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_date.year()
    }

    /// Generate the full dataset
    pub fn generate(&mut self) -> Dataset {
        self.generate_with_progress(|_| {})
    }

    /// Generate the full dataset, calling `on_record` with the number of
    /// records produced so far
    pub fn generate_with_progress<F>(&mut self, mut on_record: F) -> Dataset
    where
        F: FnMut(usize),
    {
        let mut dataset = Dataset::with_capacity(self.plan.records);
        for index in 0..self.plan.records {
            let record = self.record(index);
            dataset.push(&mut self.provider, record, index);
            on_record(index + 1);
        }
        dataset
    }

    /// Generate the record for `index` under the policy the plan assigns it
    pub fn record(&mut self, index: usize) -> RawRecord {
        match self.plan.classify(index) {
            CaseKind::Positive => self.positive(index),
            CaseKind::Negative => self.negative(index),
            CaseKind::Edge => self.edge(index),
        }
    }

    /// Fully populated, realistic record
    pub fn positive(&mut self, _index: usize) -> RawRecord {
        let p = &mut self.provider;
        RawRecord {
            title: p.word(),
            description: p.paragraph(),
            release_year: p.past_date(self.reference_date).year(),
            runtime: Some(p.int_range(MIN_RUNTIME as i64, MAX_RUNTIME as i64) as u32),
            genres: (0..POSITIVE_GENRES).map(|_| p.genre()).collect(),
            real_name: p.full_name(),
            character_name: p.full_name(),
            role: p.pick(ROLES).to_string(),
        }
    }

    /// Positive record with the field selected by the plan invalidated
    pub fn negative(&mut self, index: usize) -> RawRecord {
        let mut record = self.positive(index);
        if let Some(field) = self.plan.invalid_field(index) {
            field.apply(&mut record, self.reference_year());
        }
        record
    }

    /// Record exercising maximum sizes
    pub fn edge(&mut self, _index: usize) -> RawRecord {
        let year = self.reference_year();
        let p = &mut self.provider;
        RawRecord {
            title: p.words(EDGE_TITLE_WORDS),
            description: p.words(EDGE_DESCRIPTION_WORDS),
            release_year: year,
            runtime: Some(MAX_RUNTIME),
            genres: (0..EDGE_GENRES).map(|_| p.genre()).collect(),
            real_name: p.words(EDGE_NAME_WORDS),
            character_name: p.words(EDGE_NAME_WORDS),
            role: p.pick(ROLES).to_string(),
        }
    }
}
