//! CLI handler for the verify command.

use media_fixtures::config::{FixtureYamlConfig, DEFAULT_CREDITS_FILE, DEFAULT_TITLES_FILE};
use media_fixtures::verify::{verify_dir, VerifySummary};
use std::path::PathBuf;

pub fn run(dir: PathBuf, config: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let yaml = match config {
        Some(ref path) => FixtureYamlConfig::load(path)?,
        None => FixtureYamlConfig::default(),
    };
    let titles_file = yaml.titles_file.as_deref().unwrap_or(DEFAULT_TITLES_FILE);
    let credits_file = yaml.credits_file.as_deref().unwrap_or(DEFAULT_CREDITS_FILE);

    let summary = verify_dir(&dir, titles_file, credits_file)?;

    output_summary(&summary, json)?;

    if !summary.passed {
        anyhow::bail!("Verification failed");
    }
    Ok(())
}

fn output_summary(summary: &VerifySummary, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("Titles: {}", summary.titles);
    println!("Credits: {}", summary.credits);
    for check in &summary.checks {
        let status = if check.passed { "ok" } else { "FAILED" };
        println!("  {}: {}", check.name, status);
        for issue in &check.issues {
            println!("    - {}", issue);
        }
    }

    Ok(())
}
