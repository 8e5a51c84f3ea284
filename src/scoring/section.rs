//! The seven fixed resume sections and their point allocations

use crate::processing::resume::Resume;
use crate::scoring::issues::IssueCollector;
use crate::scoring::{contact, content, education, experience, formatting, skills, summary};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "Contact Info")]
    ContactInfo,
    #[serde(rename = "Professional Summary")]
    ProfessionalSummary,
    #[serde(rename = "Work Experience")]
    WorkExperience,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Skills")]
    Skills,
    #[serde(rename = "Formatting")]
    Formatting,
    #[serde(rename = "Content Quality")]
    ContentQuality,
}

/// Raw output of one section scorer, before clamping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub points: f64,
    pub notes: Option<String>,
}

impl Evaluation {
    pub fn new(points: f64) -> Self {
        Self { points, notes: None }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScore {
    pub section: Section,
    pub score: f64,
    pub max_score: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl SectionScore {
    pub fn ratio(&self) -> f64 {
        self.score / f64::from(self.max_score)
    }
}

impl Section {
    /// Result order for every score.
    pub const ALL: [Section; 7] = [
        Section::ContactInfo,
        Section::ProfessionalSummary,
        Section::WorkExperience,
        Section::Education,
        Section::Skills,
        Section::Formatting,
        Section::ContentQuality,
    ];

    pub const fn max_points(self) -> u32 {
        match self {
            Section::ContactInfo => 10,
            Section::ProfessionalSummary => 10,
            Section::WorkExperience => 30,
            Section::Education => 10,
            Section::Skills => 15,
            Section::Formatting => 10,
            Section::ContentQuality => 15,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Section::ContactInfo => "Contact Info",
            Section::ProfessionalSummary => "Professional Summary",
            Section::WorkExperience => "Work Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Formatting => "Formatting",
            Section::ContentQuality => "Content Quality",
        }
    }

    /// Run this section's scorer and clamp the result into `0..=max_points`.
    pub fn evaluate(self, resume: &Resume, issues: &mut IssueCollector) -> SectionScore {
        let evaluation = match self {
            Section::ContactInfo => contact::score(resume, issues),
            Section::ProfessionalSummary => summary::score(resume, issues),
            Section::WorkExperience => experience::score(resume, issues),
            Section::Education => education::score(resume, issues),
            Section::Skills => skills::score(resume, issues),
            Section::Formatting => formatting::score(resume, issues),
            Section::ContentQuality => content::score(resume, issues),
        };

        let max = f64::from(self.max_points());
        let points = if evaluation.points.is_finite() {
            evaluation.points.clamp(0.0, max)
        } else {
            0.0
        };

        SectionScore {
            section: self,
            score: round_tenth(points),
            max_score: self.max_points(),
            notes: evaluation.notes,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub const TOTAL_POINTS: u32 = {
    let mut total = 0;
    let mut i = 0;
    while i < Section::ALL.len() {
        total += Section::ALL[i].max_points();
        i += 1;
    }
    total
};

const _: () = assert!(TOTAL_POINTS == 100, "section maxima must sum to 100");

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_maxima() {
        assert_eq!(Section::ContactInfo.max_points(), 10);
        assert_eq!(Section::WorkExperience.max_points(), 30);
        assert_eq!(Section::Skills.max_points(), 15);
        assert_eq!(TOTAL_POINTS, 100);
    }

    #[test]
    fn test_section_serializes_display_name() {
        let json = serde_json::to_string(&Section::ContentQuality).unwrap();
        assert_eq!(json, "\"Content Quality\"");
        for section in Section::ALL {
            assert_eq!(section.to_string(), section.name());
        }
    }

    #[test]
    fn test_empty_resume_sections_score_zero() {
        let resume = Resume::default();
        let mut issues = IssueCollector::new();
        for section in Section::ALL {
            let score = section.evaluate(&resume, &mut issues);
            assert_eq!(score.score, 0.0, "{} should be zero", section);
            assert_eq!(score.max_score, section.max_points());
        }
    }
}
