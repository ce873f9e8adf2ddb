//! Case policy: which generation rules apply to which record index.
//!
//! The record range is split into three consecutive blocks. Indices before
//! `negative_start` are positive, indices from `negative_start` up to
//! `edge_start` are negative, the rest are edge cases. Inside the negative
//! block the offset from `negative_start` selects the one field that gets
//! invalidated.

use crate::generator::RawRecord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECORDS: usize = 100;
pub const DEFAULT_NEGATIVE_START: usize = 30;
pub const DEFAULT_EDGE_START: usize = 60;

/// Generation policy for a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    /// Realistic, fully populated record
    Positive,
    /// Realistic record with one field forced invalid
    Negative,
    /// Record exercising maximum sizes
    Edge,
}

impl CaseKind {
    /// Classify an index with the default 30/30/40 split
    pub fn classify(index: usize) -> Self {
        CasePlan::default().classify(index)
    }
}

impl std::fmt::Display for CaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseKind::Positive => write!(f, "positive"),
            CaseKind::Negative => write!(f, "negative"),
            CaseKind::Edge => write!(f, "edge"),
        }
    }
}

/// The field a negative record has forced to an invalid value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Title,
    Description,
    /// Release year in the future (reference year + 1)
    ReleaseYear,
    Runtime,
    Genres,
    RealName,
    CharacterName,
    Role,
}

impl InvalidField {
    /// Rules in negative-block offset order
    pub const ALL: [InvalidField; 8] = [
        InvalidField::Title,
        InvalidField::Description,
        InvalidField::ReleaseYear,
        InvalidField::Runtime,
        InvalidField::Genres,
        InvalidField::RealName,
        InvalidField::CharacterName,
        InvalidField::Role,
    ];

    /// Rule for an offset into the negative block. Offsets past the last
    /// rule carry no invalidation.
    pub fn for_offset(offset: usize) -> Option<Self> {
        Self::ALL.get(offset).copied()
    }

    /// Overwrite the targeted field of `record`
    pub fn apply(self, record: &mut RawRecord, reference_year: i32) {
        match self {
            InvalidField::Title => record.title.clear(),
            InvalidField::Description => record.description.clear(),
            InvalidField::ReleaseYear => record.release_year = reference_year + 1,
            InvalidField::Runtime => record.runtime = None,
            InvalidField::Genres => record.genres.clear(),
            InvalidField::RealName => record.real_name.clear(),
            InvalidField::CharacterName => record.character_name.clear(),
            InvalidField::Role => record.role.clear(),
        }
    }
}

/// How the invalidation rules cover the negative block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NegativeCoverage {
    /// Each rule once, at the start of the block; the rest stay valid (default)
    #[default]
    Once,
    /// Repeat the rules across the whole block
    Cycle,
}

impl std::str::FromStr for NegativeCoverage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "once" => Ok(NegativeCoverage::Once),
            "cycle" => Ok(NegativeCoverage::Cycle),
            _ => Err(format!(
                "Unknown negative coverage: {}. Valid options: once, cycle",
                s
            )),
        }
    }
}

impl std::fmt::Display for NegativeCoverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NegativeCoverage::Once => write!(f, "once"),
            NegativeCoverage::Cycle => write!(f, "cycle"),
        }
    }
}

/// Record count and block boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CasePlan {
    pub records: usize,
    pub negative_start: usize,
    pub edge_start: usize,
    pub coverage: NegativeCoverage,
}

impl Default for CasePlan {
    fn default() -> Self {
        Self {
            records: DEFAULT_RECORDS,
            negative_start: DEFAULT_NEGATIVE_START,
            edge_start: DEFAULT_EDGE_START,
            coverage: NegativeCoverage::Once,
        }
    }
}

impl CasePlan {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.negative_start > self.edge_start {
            anyhow::bail!(
                "negative_start ({}) must not be greater than edge_start ({})",
                self.negative_start,
                self.edge_start
            );
        }
        if self.edge_start > self.records {
            anyhow::bail!(
                "edge_start ({}) must not be greater than records ({})",
                self.edge_start,
                self.records
            );
        }
        Ok(())
    }

    pub fn classify(&self, index: usize) -> CaseKind {
        if index < self.negative_start {
            CaseKind::Positive
        } else if index < self.edge_start {
            CaseKind::Negative
        } else {
            CaseKind::Edge
        }
    }

    /// Field to invalidate for `index`, if any
    pub fn invalid_field(&self, index: usize) -> Option<InvalidField> {
        if self.classify(index) != CaseKind::Negative {
            return None;
        }
        let offset = index - self.negative_start;
        match self.coverage {
            NegativeCoverage::Once => InvalidField::for_offset(offset),
            NegativeCoverage::Cycle => InvalidField::for_offset(offset % InvalidField::ALL.len()),
        }
    }

    /// Number of indices classified as `kind`
    pub fn count(&self, kind: CaseKind) -> usize {
        match kind {
            CaseKind::Positive => self.negative_start,
            CaseKind::Negative => self.edge_start - self.negative_start,
            CaseKind::Edge => self.records - self.edge_start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(CaseKind::classify(0), CaseKind::Positive);
        assert_eq!(CaseKind::classify(29), CaseKind::Positive);
        assert_eq!(CaseKind::classify(30), CaseKind::Negative);
        assert_eq!(CaseKind::classify(59), CaseKind::Negative);
        assert_eq!(CaseKind::classify(60), CaseKind::Edge);
        assert_eq!(CaseKind::classify(99), CaseKind::Edge);
    }

    #[test]
    fn test_invalid_field_once() {
        let plan = CasePlan::default();
        assert_eq!(plan.invalid_field(29), None);
        assert_eq!(plan.invalid_field(30), Some(InvalidField::Title));
        assert_eq!(plan.invalid_field(32), Some(InvalidField::ReleaseYear));
        assert_eq!(plan.invalid_field(37), Some(InvalidField::Role));
        assert_eq!(plan.invalid_field(38), None);
        assert_eq!(plan.invalid_field(59), None);
        assert_eq!(plan.invalid_field(60), None);
    }

    #[test]
    fn test_invalid_field_cycle() {
        let plan = CasePlan {
            coverage: NegativeCoverage::Cycle,
            ..Default::default()
        };
        assert_eq!(plan.invalid_field(38), Some(InvalidField::Title));
        assert_eq!(plan.invalid_field(45), Some(InvalidField::Role));
        assert_eq!(plan.invalid_field(59), Some(InvalidField::Role));
        assert_eq!(plan.invalid_field(60), None);
    }

    #[test]
    fn test_rules_cover_every_raw_field_once() {
        let plan = CasePlan::default();
        let fields: Vec<_> = (30..38).filter_map(|i| plan.invalid_field(i)).collect();
        assert_eq!(fields, InvalidField::ALL.to_vec());
        assert_eq!(InvalidField::for_offset(8), None);
    }

    #[test]
    fn test_counts() {
        let plan = CasePlan::default();
        assert_eq!(plan.count(CaseKind::Positive), 30);
        assert_eq!(plan.count(CaseKind::Negative), 30);
        assert_eq!(plan.count(CaseKind::Edge), 40);
    }

    #[test]
    fn test_validate_rejects_overlapping_blocks() {
        let plan = CasePlan {
            negative_start: 70,
            edge_start: 60,
            ..Default::default()
        };
        assert!(plan.validate().is_err());

        let plan = CasePlan {
            records: 50,
            ..Default::default()
        };
        assert!(plan.validate().is_err());

        assert!(CasePlan::default().validate().is_ok());
    }

    #[test]
    fn test_negative_coverage_parse() {
        assert_eq!(
            "once".parse::<NegativeCoverage>().unwrap(),
            NegativeCoverage::Once
        );
        assert_eq!(
            "CYCLE".parse::<NegativeCoverage>().unwrap(),
            NegativeCoverage::Cycle
        );
        assert!("twice".parse::<NegativeCoverage>().is_err());
    }
}
