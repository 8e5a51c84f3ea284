//! Combines section scores into the final ATS result

use crate::scoring::issues::{count_severity, Issue, Severity};
use crate::scoring::section::SectionScore;
use serde::{Deserialize, Serialize};

/// Minimum composite score for a resume to be considered screen-ready.
pub const PASSING_SCORE: u8 = 70;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall: u8,
    #[serde(rename = "passesATS")]
    pub passes_ats: bool,
    pub summary: String,
    pub issues: Vec<Issue>,
    pub sections: Vec<SectionScore>,
}

impl ScoreResult {
    pub fn critical_count(&self) -> usize {
        count_severity(&self.issues, Severity::Critical)
    }

    pub fn issues_with(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}

/// `round(Σ scores)` clamped into `0..=100`.
pub fn overall_score(sections: &[SectionScore]) -> u8 {
    let total: f64 = sections.iter().map(|s| s.score).sum();
    if !total.is_finite() {
        return 0;
    }
    total.round().clamp(0.0, 100.0) as u8
}

pub fn passes(overall: u8) -> bool {
    overall >= PASSING_SCORE
}

pub fn render_summary(overall: u8, critical: usize) -> String {
    let critical_text = match critical {
        0 => "no critical issues".to_string(),
        1 => "1 critical issue".to_string(),
        n => format!("{} critical issues", n),
    };
    let verdict = if passes(overall) {
        "likely to pass ATS screening"
    } else {
        "at risk of being filtered out by ATS screening"
    };
    format!(
        "Scored {}/100 with {}; this resume is {}.",
        overall, critical_text, verdict
    )
}

pub fn compose(sections: Vec<SectionScore>, issues: Vec<Issue>) -> ScoreResult {
    let overall = overall_score(&sections);
    let critical = count_severity(&issues, Severity::Critical);

    ScoreResult {
        overall,
        passes_ats: passes(overall),
        summary: render_summary(overall, critical),
        issues,
        sections,
    }
}
