//! Positive, negative and edge-case fixtures for media titles and credits.
//!
//! Generates a batch of records (100 by default), splits each into a title
//! row and a credit row joined by id, and exports both as CSV.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use media_fixtures::{pipeline, FixtureConfig, MemorySink};
//!
//! let config = FixtureConfig {
//!     seed: 42,
//!     reference_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     ..Default::default()
//! };
//! let mut sink = MemorySink::new();
//! let stats = pipeline::run(&config, &mut sink).unwrap();
//!
//! assert_eq!(stats.records, 100);
//! assert!(sink.get("titles.csv").is_some());
//! ```

pub mod config;
pub mod dataset;
pub mod export;
pub mod generator;
pub mod json_schema;
pub mod pipeline;
pub mod policy;
pub mod provider;
pub mod verify;
pub mod vocab;

pub use config::{FixtureConfig, FixtureYamlConfig};
pub use dataset::{CreditRow, Dataset, TitleRow};
pub use export::{Artifact, ArtifactSink, DirectorySink, MemorySink};
pub use generator::{Generator, RawRecord};
pub use pipeline::GenerateStats;
pub use policy::{CaseKind, CasePlan, InvalidField, NegativeCoverage};
pub use provider::{FakeProvider, ValueProvider};
pub use verify::VerifySummary;
