//! The generate pipeline: classify, generate, shape, serialize, export.

use crate::config::FixtureConfig;
use crate::dataset::Dataset;
use crate::export::{to_csv, Artifact, ArtifactSink};
use crate::generator::Generator;
use crate::policy::{CaseKind, NegativeCoverage};
use crate::provider::FakeProvider;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use schemars::JsonSchema;
use serde::Serialize;

/// Statistics from a generate run
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GenerateStats {
    /// Seed the run used
    pub seed: u64,
    /// Date treated as today (YYYY-MM-DD)
    pub reference_date: String,
    /// Total records generated
    pub records: usize,
    pub positive: usize,
    pub negative: usize,
    pub edge: usize,
    pub negative_coverage: NegativeCoverage,
    /// Emitted artifacts
    pub artifacts: Vec<ArtifactStats>,
}

/// Per-artifact statistics
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ArtifactStats {
    pub name: String,
    pub mime: String,
    pub rows: usize,
    pub bytes: usize,
}

/// Generate the dataset described by `config`
pub fn generate(config: &FixtureConfig) -> Dataset {
    let progress_bar = if config.progress {
        let pb = ProgressBar::new(config.plan.records as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  ")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message("Generating...");
        Some(pb)
    } else {
        None
    };

    let provider = FakeProvider::seeded(config.seed);
    let mut generator = Generator::new(provider, config.plan, config.reference_date);
    let dataset = generator.generate_with_progress(|done| {
        if let Some(ref pb) = progress_bar {
            pb.set_position(done as u64);
        }
    });

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    dataset
}

/// Serialize `dataset` into the two CSV artifacts
pub fn serialize(dataset: &Dataset, config: &FixtureConfig) -> anyhow::Result<[Artifact; 2]> {
    let titles = to_csv(&dataset.titles)?;
    let credits = to_csv(&dataset.credits)?;
    Ok([
        Artifact::csv(config.titles_file.clone(), titles),
        Artifact::csv(config.credits_file.clone(), credits),
    ])
}

/// Run the whole pipeline, handing both artifacts to `sink`
pub fn run(config: &FixtureConfig, sink: &mut dyn ArtifactSink) -> anyhow::Result<GenerateStats> {
    config.validate()?;

    if config.progress {
        eprintln!(
            "Generating {} records (seed: {}, reference date: {})",
            config.plan.records, config.seed, config.reference_date
        );
    }

    let dataset = generate(config);

    if config.progress {
        eprintln!(
            "Serializing {} title and {} credit rows...",
            dataset.titles.len(),
            dataset.credits.len()
        );
    }

    let artifacts = serialize(&dataset, config)?;
    let row_counts = [dataset.titles.len(), dataset.credits.len()];

    let mut artifact_stats: Vec<ArtifactStats> = Vec::with_capacity(artifacts.len());
    for (artifact, rows) in artifacts.iter().zip(row_counts) {
        sink.emit(artifact).with_context(|| {
            if artifact_stats.is_empty() {
                format!("Failed to emit {}", artifact.name)
            } else {
                let emitted: Vec<_> = artifact_stats.iter().map(|a| a.name.as_str()).collect();
                format!(
                    "Failed to emit {} after {} was written; the files no longer match",
                    artifact.name,
                    emitted.join(", ")
                )
            }
        })?;
        if config.progress {
            eprintln!("Emitted {} ({} bytes)", artifact.name, artifact.len());
        }
        artifact_stats.push(ArtifactStats {
            name: artifact.name.clone(),
            mime: artifact.mime.to_string(),
            rows,
            bytes: artifact.len(),
        });
    }

    Ok(GenerateStats {
        seed: config.seed,
        reference_date: config.reference_date.format("%Y-%m-%d").to_string(),
        records: dataset.len(),
        positive: config.plan.count(CaseKind::Positive),
        negative: config.plan.count(CaseKind::Negative),
        edge: config.plan.count(CaseKind::Edge),
        negative_coverage: config.plan.coverage,
        artifacts: artifact_stats,
    })
}
