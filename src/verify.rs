//! Structural checks over a generated titles/credits pair.
//!
//! Only checks what holds for every run: headers, the 1:1 join and
//! vocabulary membership. Negative records are expected to carry invalid
//! values, so field contents are not judged.

use crate::dataset::{CreditRow, TitleRow, CREDIT_COLUMNS, TITLE_COLUMNS};
use crate::export::{from_csv, DecodedCsv};
use crate::vocab::{is_age_certification, is_role};
use anyhow::Context;
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Outcome of a single check
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    /// Problems found, capped at `MAX_REPORTED_ISSUES`
    pub issues: Vec<String>,
}

/// Result of verifying one output directory
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct VerifySummary {
    pub titles: usize,
    pub credits: usize,
    pub checks: Vec<CheckResult>,
    pub passed: bool,
}

pub const MAX_REPORTED_ISSUES: usize = 20;

struct Check {
    name: &'static str,
    issues: Vec<String>,
}

impl Check {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            issues: Vec::new(),
        }
    }

    fn fail(&mut self, issue: String) {
        if self.issues.len() < MAX_REPORTED_ISSUES {
            self.issues.push(issue);
        }
    }

    fn finish(self) -> CheckResult {
        CheckResult {
            name: self.name.to_string(),
            passed: self.issues.is_empty(),
            issues: self.issues,
        }
    }
}

/// Read `<dir>/<titles_file>` and `<dir>/<credits_file>` and verify them
pub fn verify_dir(
    dir: &Path,
    titles_file: &str,
    credits_file: &str,
) -> anyhow::Result<VerifySummary> {
    let titles_path = dir.join(titles_file);
    let credits_path = dir.join(credits_file);
    let titles_text = fs::read_to_string(&titles_path)
        .with_context(|| format!("Failed to read {:?}", titles_path))?;
    let credits_text = fs::read_to_string(&credits_path)
        .with_context(|| format!("Failed to read {:?}", credits_path))?;
    verify_text(&titles_text, &credits_text)
}

/// Verify CSV text for titles and credits
pub fn verify_text(titles_text: &str, credits_text: &str) -> anyhow::Result<VerifySummary> {
    let titles: DecodedCsv<TitleRow> = from_csv(titles_text).context("titles")?;
    let credits: DecodedCsv<CreditRow> = from_csv(credits_text).context("credits")?;
    Ok(verify(&titles, &credits))
}

/// Verify decoded titles and credits
pub fn verify(titles: &DecodedCsv<TitleRow>, credits: &DecodedCsv<CreditRow>) -> VerifySummary {
    let checks = vec![
        check_headers(titles, credits),
        check_join(&titles.rows, &credits.rows),
        check_vocabulary(&titles.rows, &credits.rows),
    ];
    let passed = checks.iter().all(|c| c.passed);

    VerifySummary {
        titles: titles.rows.len(),
        credits: credits.rows.len(),
        checks,
        passed,
    }
}

fn check_headers(titles: &DecodedCsv<TitleRow>, credits: &DecodedCsv<CreditRow>) -> CheckResult {
    let mut check = Check::new("headers");
    if titles.headers != TITLE_COLUMNS {
        check.fail(format!(
            "titles header is [{}], expected [{}]",
            titles.headers.join(","),
            TITLE_COLUMNS.join(",")
        ));
    }
    if credits.headers != CREDIT_COLUMNS {
        check.fail(format!(
            "credits header is [{}], expected [{}]",
            credits.headers.join(","),
            CREDIT_COLUMNS.join(",")
        ));
    }
    check.finish()
}

fn check_join(titles: &[TitleRow], credits: &[CreditRow]) -> CheckResult {
    let mut check = Check::new("title_credit_join");

    let mut title_ids: HashMap<usize, usize> = HashMap::new();
    for title in titles {
        *title_ids.entry(title.id).or_default() += 1;
    }
    for (id, count) in &title_ids {
        if *count > 1 {
            check.fail(format!("title id {} appears {} times", id, count));
        }
    }

    let mut credited: HashMap<usize, usize> = HashMap::new();
    for credit in credits {
        if credit.id != credit.title_id {
            check.fail(format!(
                "credit {} references title {} (expected 1:1 ids)",
                credit.id, credit.title_id
            ));
        }
        if !title_ids.contains_key(&credit.title_id) {
            check.fail(format!(
                "credit {} references missing title {}",
                credit.id, credit.title_id
            ));
        }
        *credited.entry(credit.title_id).or_default() += 1;
    }

    for title in titles {
        match credited.get(&title.id) {
            None => check.fail(format!("title {} has no credit", title.id)),
            Some(n) if *n > 1 => check.fail(format!("title {} has {} credits", title.id, n)),
            Some(_) => {}
        }
    }

    check.finish()
}

fn check_vocabulary(titles: &[TitleRow], credits: &[CreditRow]) -> CheckResult {
    let mut check = Check::new("vocabulary");
    for title in titles {
        if !is_age_certification(&title.age_certification) {
            check.fail(format!(
                "title {} has unknown age certification {:?}",
                title.id, title.age_certification
            ));
        }
    }
    for credit in credits {
        if !credit.role.is_empty() && !is_role(&credit.role) {
            check.fail(format!("credit {} has unknown role {:?}", credit.id, credit.role));
        }
    }
    check.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: &str = "id,title,description,release_year,age_certification,runtime,genres,production_country,seasons\n\
0,Heat,d,1995,R,170,[],US,\n\
1,Ran,d,1985,PG,,\"[\"\"Jazz\"\"]\",JP,2\n";

    #[test]
    fn test_valid_pair_passes() {
        let credits = "id,title_id,real_name,character_name,role\n0,0,a,b,Actor\n1,1,c,d,\n";
        let summary = verify_text(TITLES, credits).unwrap();
        assert!(summary.passed, "{:?}", summary.checks);
        assert_eq!(summary.titles, 2);
        assert_eq!(summary.credits, 2);
    }

    #[test]
    fn test_missing_credit_fails_join() {
        let credits = "id,title_id,real_name,character_name,role\n0,0,a,b,Actor\n";
        let summary = verify_text(TITLES, credits).unwrap();
        assert!(!summary.passed);
        let join = summary
            .checks
            .iter()
            .find(|c| c.name == "title_credit_join")
            .unwrap();
        assert_eq!(join.issues, vec!["title 1 has no credit".to_string()]);
    }

    #[test]
    fn test_unknown_role_fails_vocabulary() {
        let credits = "id,title_id,real_name,character_name,role\n0,0,a,b,Gaffer\n1,1,c,d,Actor\n";
        let summary = verify_text(TITLES, credits).unwrap();
        let vocab = summary.checks.iter().find(|c| c.name == "vocabulary").unwrap();
        assert!(!vocab.passed);
        assert!(vocab.issues[0].contains("Gaffer"));
    }

    #[test]
    fn test_reordered_header_fails() {
        let credits = "title_id,id,real_name,character_name,role\n0,0,a,b,Actor\n1,1,c,d,Actor\n";
        let summary = verify_text(TITLES, credits).unwrap();
        let headers = summary.checks.iter().find(|c| c.name == "headers").unwrap();
        assert!(!headers.passed);
    }
}
