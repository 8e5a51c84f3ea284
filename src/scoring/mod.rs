//! Deterministic multi-section ATS scoring

pub mod composer;
pub mod contact;
pub mod content;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod issues;
pub mod section;
pub mod skills;
pub mod summary;

use crate::processing::resume::Resume;
use composer::{compose, ScoreResult};
use issues::IssueCollector;
use log::debug;
use section::{Section, SectionScore};

/// Score a resume across the seven fixed sections. Never fails: missing or
/// malformed fields lower the score and add issues instead.
pub fn calculate_ats_score(resume: &Resume) -> ScoreResult {
    let mut issues = IssueCollector::new();
    let sections: Vec<SectionScore> = Section::ALL
        .iter()
        .map(|section| {
            let score = section.evaluate(resume, &mut issues);
            debug!("{}: {:.1}/{}", section, score.score, score.max_score);
            score
        })
        .collect();

    compose(sections, issues.into_issues())
}
