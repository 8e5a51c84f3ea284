//! Skills: count up to 10 points, category spread up to 5

use crate::processing::resume::Resume;
use crate::scoring::issues::{Issue, IssueCollector};
use crate::scoring::section::{Evaluation, Section};
use std::collections::HashSet;

const SECTION: Section = Section::Skills;
const TARGET_SKILLS: usize = 12;
const MIN_SKILLS: usize = 6;
const MAX_SKILLS: usize = 40;

pub fn score(resume: &Resume, issues: &mut IssueCollector) -> Evaluation {
    let mut seen = HashSet::new();
    let mut duplicates = 0;
    for skill in resume.all_skills().map(str::trim).filter(|s| !s.is_empty()) {
        if !seen.insert(skill.to_lowercase()) {
            duplicates += 1;
        }
    }
    let distinct = seen.len();

    if distinct == 0 {
        issues.push(
            Issue::critical(SECTION, "Missing Skills")
                .with_fix("Add a skills section listing the tools and competencies you use"),
        );
        return Evaluation::new(0.0);
    }

    let categories = resume
        .skills
        .values()
        .filter(|list| list.iter().any(|s| !s.trim().is_empty()))
        .count();

    let count_points = 10.0 * distinct.min(TARGET_SKILLS) as f64 / TARGET_SKILLS as f64;
    let spread_points = match categories {
        0 | 1 => 2.5,
        _ => 5.0,
    };

    if distinct < MIN_SKILLS {
        issues.push(
            Issue::warning(SECTION, "Too Few Skills").with_fix(format!(
                "List at least {} relevant skills",
                MIN_SKILLS
            )),
        );
    }
    if categories == 1 {
        issues.push(
            Issue::suggestion(SECTION, "Group Skills Into Categories")
                .with_fix("Split skills into groups such as tools, methods and languages"),
        );
    }
    if duplicates > 0 {
        issues.push(
            Issue::suggestion(SECTION, "Duplicate Skills")
                .with_fix(format!("Remove {} repeated skill entries", duplicates)),
        );
    }
    if distinct > MAX_SKILLS {
        issues.push(
            Issue::suggestion(SECTION, "Too Many Skills")
                .with_fix(format!("Keep the {} most relevant skills", MAX_SKILLS)),
        );
    }

    Evaluation::new(count_points + spread_points)
        .with_notes(format!("{} skills in {} categories", distinct, categories))
}
