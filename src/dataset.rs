//! Output rows and the accumulator the generator fills.

use crate::generator::RawRecord;
use crate::provider::ValueProvider;
use crate::vocab::AGE_CERTIFICATIONS;
use serde::{Deserialize, Serialize};

pub const MIN_SEASONS: u32 = 1;
pub const MAX_SEASONS: u32 = 10;
pub const SEASONS_PROBABILITY: f64 = 0.5;

/// Header of `titles.csv`, in column order
pub const TITLE_COLUMNS: &[&str] = &[
    "id",
    "title",
    "description",
    "release_year",
    "age_certification",
    "runtime",
    "genres",
    "production_country",
    "seasons",
];

/// Header of `credits.csv`, in column order
pub const CREDIT_COLUMNS: &[&str] = &["id", "title_id", "real_name", "character_name", "role"];

/// A row of `titles.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRow {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub age_certification: String,
    pub runtime: Option<u32>,
    #[serde(with = "json_list")]
    pub genres: Vec<String>,
    pub production_country: String,
    pub seasons: Option<u32>,
}

/// A row of `credits.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRow {
    pub id: usize,
    pub title_id: usize,
    pub real_name: String,
    pub character_name: String,
    pub role: String,
}

/// Title and credit rows, one of each per record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub titles: Vec<TitleRow>,
    pub credits: Vec<CreditRow>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(records: usize) -> Self {
        Self {
            titles: Vec::with_capacity(records),
            credits: Vec::with_capacity(records),
        }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Split `record` into a title row and a credit row sharing `id`.
    ///
    /// Age certification, production country and seasons are drawn here,
    /// independently of the case policy.
    pub fn push<P: ValueProvider + ?Sized>(
        &mut self,
        provider: &mut P,
        record: RawRecord,
        id: usize,
    ) {
        let age_certification = provider.pick(AGE_CERTIFICATIONS).to_string();
        let production_country = provider.country_code();
        let seasons = if provider.bool_with_probability(SEASONS_PROBABILITY) {
            Some(provider.int_range(MIN_SEASONS as i64, MAX_SEASONS as i64) as u32)
        } else {
            None
        };

        self.titles.push(TitleRow {
            id,
            title: record.title,
            description: record.description,
            release_year: record.release_year,
            age_certification,
            runtime: record.runtime,
            genres: record.genres,
            production_country,
            seasons,
        });

        self.credits.push(CreditRow {
            id,
            title_id: id,
            real_name: record.real_name,
            character_name: record.character_name,
            role: record.role,
        });
    }
}

/// Genres travel through a single CSV cell as a JSON array
mod json_list {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S: Serializer>(
        items: &Vec<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let text = serde_json::to_string(items).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).map_err(serde::de::Error::custom)
    }
}
