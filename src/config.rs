//! Configuration for a fixture run.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! whatever the CLI sets explicitly.

use crate::policy::{CasePlan, NegativeCoverage};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLES_FILE: &str = "titles.csv";
pub const DEFAULT_CREDITS_FILE: &str = "credits.csv";

/// YAML configuration file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureYamlConfig {
    /// Total number of records
    pub records: Option<usize>,
    /// First index of the negative block
    pub negative_start: Option<usize>,
    /// First index of the edge block
    pub edge_start: Option<usize>,
    /// Coverage of the negative block
    pub negative_coverage: Option<NegativeCoverage>,
    /// Random seed
    pub seed: Option<u64>,
    /// File name for title rows
    pub titles_file: Option<String>,
    /// File name for credit rows
    pub credits_file: Option<String>,
}

impl FixtureYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {:?}: {}", path, e))?;
        let config: FixtureYamlConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {:?}: {}", path, e))?;
        Ok(config)
    }
}

/// Resolved configuration for one run
///
/// `Default` behaves like an unseeded CLI run: it draws a fresh random seed
/// and uses today's local date. Set `seed` and `reference_date` explicitly
/// when output has to be reproducible.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// Record count and case blocks
    pub plan: CasePlan,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Date treated as today
    pub reference_date: NaiveDate,
    /// Artifact name for title rows
    pub titles_file: String,
    /// Artifact name for credit rows
    pub credits_file: String,
    /// Show progress
    pub progress: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            plan: CasePlan::default(),
            seed: rand::random(),
            reference_date: chrono::Local::now().date_naive(),
            titles_file: DEFAULT_TITLES_FILE.to_string(),
            credits_file: DEFAULT_CREDITS_FILE.to_string(),
            progress: false,
        }
    }
}

impl FixtureConfig {
    /// Create a new builder
    pub fn builder() -> FixtureConfigBuilder {
        FixtureConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.plan.validate()?;

        if self.titles_file.trim().is_empty() || self.credits_file.trim().is_empty() {
            anyhow::bail!("Output file names must not be empty");
        }
        if self.titles_file == self.credits_file {
            anyhow::bail!(
                "titles_file and credits_file must differ (both are {:?})",
                self.titles_file
            );
        }
        for name in [&self.titles_file, &self.credits_file] {
            if name.contains('/') || name.contains('\\') {
                anyhow::bail!("Output file name must not contain a path: {:?}", name);
            }
        }

        Ok(())
    }
}

/// Builder for FixtureConfig
#[derive(Default)]
pub struct FixtureConfigBuilder {
    config_file: Option<PathBuf>,
    seed: Option<u64>,
    reference_date: Option<NaiveDate>,
    cycle_negative: bool,
    progress: bool,
}

impl FixtureConfigBuilder {
    pub fn config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn reference_date(mut self, date: Option<NaiveDate>) -> Self {
        self.reference_date = date;
        self
    }

    pub fn cycle_negative(mut self, cycle: bool) -> Self {
        self.cycle_negative = cycle;
        self
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Build the FixtureConfig
    pub fn build(self) -> anyhow::Result<FixtureConfig> {
        let yaml = match self.config_file {
            Some(ref path) => FixtureYamlConfig::load(path)?,
            None => FixtureYamlConfig::default(),
        };

        let defaults = CasePlan::default();
        let mut plan = CasePlan {
            records: yaml.records.unwrap_or(defaults.records),
            negative_start: yaml.negative_start.unwrap_or(defaults.negative_start),
            edge_start: yaml.edge_start.unwrap_or(defaults.edge_start),
            coverage: yaml.negative_coverage.unwrap_or(defaults.coverage),
        };
        if self.cycle_negative {
            plan.coverage = NegativeCoverage::Cycle;
        }

        let config = FixtureConfig {
            plan,
            seed: self.seed.or(yaml.seed).unwrap_or_else(rand::random),
            reference_date: self
                .reference_date
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            titles_file: yaml
                .titles_file
                .unwrap_or_else(|| DEFAULT_TITLES_FILE.to_string()),
            credits_file: yaml
                .credits_file
                .unwrap_or_else(|| DEFAULT_CREDITS_FILE.to_string()),
            progress: self.progress,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
records: 50
negative_start: 10
edge_start: 40
negative_coverage: cycle
seed: 7
titles_file: movies.csv
"#;
        let config: FixtureYamlConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.records, Some(50));
        assert_eq!(config.negative_coverage, Some(NegativeCoverage::Cycle));
        assert_eq!(config.titles_file.as_deref(), Some("movies.csv"));
        assert_eq!(config.credits_file, None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<FixtureYamlConfig, _> = serde_yaml_ng::from_str("rows: 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let config = FixtureConfig::builder().seed(Some(1)).build().unwrap();
        assert_eq!(config.plan, CasePlan::default());
        assert_eq!(config.seed, 1);
        assert_eq!(config.titles_file, "titles.csv");
        assert_eq!(config.credits_file, "credits.csv");
    }

    #[test]
    fn test_cli_overrides_yaml() {
        let file = write_yaml("seed: 7\nnegative_coverage: once\n");
        let config = FixtureConfig::builder()
            .config_file(Some(file.path().to_path_buf()))
            .seed(Some(99))
            .cycle_negative(true)
            .build()
            .unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.plan.coverage, NegativeCoverage::Cycle);
    }

    #[test]
    fn test_yaml_seed_used_without_cli_seed() {
        let file = write_yaml("seed: 7\n");
        let config = FixtureConfig::builder()
            .config_file(Some(file.path().to_path_buf()))
            .build()
            .unwrap();
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_invalid_plan_rejected() {
        let file = write_yaml("records: 20\n");
        let err = FixtureConfig::builder()
            .config_file(Some(file.path().to_path_buf()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("edge_start"));
    }

    #[test]
    fn test_same_file_names_rejected() {
        let file = write_yaml("titles_file: out.csv\ncredits_file: out.csv\n");
        assert!(FixtureConfig::builder()
            .config_file(Some(file.path().to_path_buf()))
            .build()
            .is_err());
    }

    #[test]
    fn test_default_is_unseeded() {
        let a = FixtureConfig::default();
        let b = FixtureConfig::default();
        assert_ne!(a.seed, b.seed);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_explicit_seed_and_date_are_kept() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let config = FixtureConfig::builder()
            .seed(Some(3))
            .reference_date(Some(date))
            .build()
            .unwrap();
        assert_eq!((config.seed, config.reference_date), (3, date));
    }
}
