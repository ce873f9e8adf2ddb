//! CLI handler for the generate command.

use chrono::NaiveDate;
use media_fixtures::export::{ArtifactSink, DirectorySink, MemorySink};
use media_fixtures::{pipeline, FixtureConfig, GenerateStats};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub fn run(
    output: PathBuf,
    seed: Option<u64>,
    config: Option<PathBuf>,
    cycle_negative: bool,
    reference_date: Option<String>,
    progress: bool,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let reference_date = reference_date
        .map(|d| {
            NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                .map_err(|e| anyhow::anyhow!("Invalid --reference-date {:?}: {}", d, e))
        })
        .transpose()?;

    let fixture_config = FixtureConfig::builder()
        .config_file(config)
        .seed(seed)
        .reference_date(reference_date)
        .cycle_negative(cycle_negative)
        .progress(progress && !json)
        .build()?;

    let mut directory_sink;
    let mut memory_sink;
    let sink: &mut dyn ArtifactSink = if dry_run {
        memory_sink = MemorySink::new();
        &mut memory_sink
    } else {
        directory_sink = DirectorySink::new(output.clone());
        &mut directory_sink
    };

    let stats = pipeline::run(&fixture_config, sink)?;

    output_stats(&stats, &output, dry_run, json)
}

fn output_stats(
    stats: &GenerateStats,
    output: &std::path::Path,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    if dry_run {
        eprintln!("Dry run: nothing written");
    }
    eprintln!(
        "Generated {} records ({} positive, {} negative [{}], {} edge)",
        stats.records, stats.positive, stats.negative, stats.negative_coverage, stats.edge
    );
    eprintln!("  Seed: {}", stats.seed);
    eprintln!("  Reference date: {}", stats.reference_date);
    for artifact in &stats.artifacts {
        let location = if dry_run {
            artifact.name.clone()
        } else {
            output.join(&artifact.name).display().to_string()
        };
        eprintln!(
            "  {}: {} rows, {} bytes",
            location, artifact.rows, artifact.bytes
        );
    }

    Ok(())
}
