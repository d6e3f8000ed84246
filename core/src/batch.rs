//! Parallel batch analysis with single-writer merging.
//!
//! Transcripts are independent, so staging runs fully in parallel against
//! an immutable roster view. Merges are applied sequentially afterwards;
//! a report is merged whole or not at all, so abandoning unmerged work
//! never leaves the roster partially updated.

use crate::analyzer::{MatchReport, analyze_events};
use crate::error::AnalysisError;
use crate::roster::Roster;
use rayon::prelude::*;
use ringside_types::LogEvent;

/// One unit of batch work: a source reference plus its retrieved,
/// tokenized transcript. Retrieval itself is the caller's concern.
#[derive(Debug, Clone)]
pub struct ReplayJob {
    pub source: String,
    pub events: Vec<LogEvent>,
}

impl ReplayJob {
    pub fn from_text(source: impl Into<String>, text: &str) -> Self {
        Self {
            source: source.into(),
            events: crate::tokenizer::tokenize(text),
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Match identifiers merged into the roster, in job order.
    pub merged: Vec<String>,
    pub failures: Vec<BatchFailure>,
}

#[derive(Debug)]
pub struct BatchFailure {
    pub source: String,
    pub error: AnalysisError,
}

/// Stage every job in parallel against a read-only roster view.
pub fn stage_batch(
    jobs: &[ReplayJob],
    roster: &Roster,
) -> (Vec<MatchReport>, Vec<BatchFailure>) {
    let results: Vec<(usize, Result<MatchReport, AnalysisError>)> = jobs
        .par_iter()
        .enumerate()
        .map(|(i, job)| (i, analyze_events(&job.events, &job.source, roster)))
        .collect();

    let mut reports = Vec::new();
    let mut failures = Vec::new();
    for (i, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(error) => {
                tracing::warn!(source = %jobs[i].source, %error, "transcript skipped");
                failures.push(BatchFailure {
                    source: jobs[i].source.clone(),
                    error,
                });
            }
        }
    }
    (reports, failures)
}

/// Stage and merge in one call, for callers that own the roster.
pub fn analyze_batch(jobs: &[ReplayJob], roster: &mut Roster) -> BatchOutcome {
    let (reports, failures) = stage_batch(jobs, roster);
    let mut outcome = BatchOutcome {
        failures,
        ..Default::default()
    };
    for report in reports {
        outcome.merged.push(report.match_id.clone());
        roster.merge_report(&report);
    }
    outcome
}
