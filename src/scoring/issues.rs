//! Issue taxonomy and the order-preserving collector the scorers write into

use crate::scoring::section::Section;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How disqualifying a finding is. Ordered so that `Critical` is greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Optional polish.
    Suggestion,
    /// Hurts competitiveness but is not disqualifying.
    Warning,
    /// Likely to fail automated screening outright.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub section: Section,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fix: Option<String>,
}

impl Issue {
    pub fn new(section: Section, severity: Severity, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            section,
            severity,
            fix: None,
        }
    }

    pub fn critical(section: Section, title: impl Into<String>) -> Self {
        Self::new(section, Severity::Critical, title)
    }

    pub fn warning(section: Section, title: impl Into<String>) -> Self {
        Self::new(section, Severity::Warning, title)
    }

    pub fn suggestion(section: Section, title: impl Into<String>) -> Self {
        Self::new(section, Severity::Suggestion, title)
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }
}

/// Flat list of findings in the order the scorers report them.
#[derive(Debug, Clone, Default)]
pub struct IssueCollector {
    issues: Vec<Issue>,
}

impl IssueCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        count_severity(&self.issues, severity)
    }

    pub fn issues_for(&self, section: Section) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.section == section)
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

pub fn count_severity(issues: &[Issue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}
