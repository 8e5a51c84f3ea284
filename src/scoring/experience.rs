//! Work experience: per-entry completeness plus document-wide date checks

use crate::processing::dates::{majority_format, parse_month, DateFormat};
use crate::processing::resume::{Experience, Resume};
use crate::scoring::issues::{Issue, IssueCollector};
use crate::scoring::section::{Evaluation, Section};

const SECTION: Section = Section::WorkExperience;
const TARGET_BULLETS: usize = 3;
const DATE_FORMAT_PENALTY: f64 = 2.0;

pub fn score(resume: &Resume, issues: &mut IssueCollector) -> Evaluation {
    if resume.experience.is_empty() {
        issues.push(
            Issue::critical(SECTION, "Missing Work Experience")
                .with_fix("Add at least one role with dates and achievement bullets"),
        );
        return Evaluation::new(0.0);
    }

    let mut total = 0.0;
    for (index, entry) in resume.experience.iter().enumerate() {
        total += score_entry(entry, index, issues);
    }
    let completeness = total / resume.experience.len() as f64;
    let mut points = f64::from(SECTION.max_points()) * completeness;

    if check_date_consistency(resume, issues) {
        points -= DATE_FORMAT_PENALTY;
    }
    check_date_order(resume, issues);

    Evaluation::new(points).with_notes(format!(
        "{} roles, {:.0}% complete",
        resume.experience.len(),
        completeness * 100.0
    ))
}

/// Entry completeness in `0.0..=1.0`: role 0.2, organization 0.2, start
/// and end date 0.1 each, bullets up to 0.4.
fn score_entry(entry: &Experience, index: usize, issues: &mut IssueCollector) -> f64 {
    let label = entry_label(entry, index);
    let mut score = 0.0;

    if entry.role.trim().is_empty() {
        issues.push(
            Issue::warning(SECTION, format!("Missing Job Title ({})", label))
                .with_fix("State the position you held"),
        );
    } else {
        score += 0.2;
    }

    if entry.organization.trim().is_empty() {
        issues.push(
            Issue::warning(SECTION, format!("Missing Employer ({})", label))
                .with_fix("Name the organization you worked for"),
        );
    } else {
        score += 0.2;
    }

    if entry.start_date.trim().is_empty() {
        issues.push(
            Issue::warning(SECTION, format!("Missing Employment Dates ({})", label))
                .with_fix("Add start and end dates, e.g. 'Jan 2020 - Present'"),
        );
    } else {
        score += 0.1;
    }

    // "Present" and friends count as an end date
    if entry.end_date.trim().is_empty() {
        if !entry.start_date.trim().is_empty() {
            issues.push(
                Issue::suggestion(SECTION, format!("Missing End Date ({})", label))
                    .with_fix("Add an end date, or 'Present' for a current role"),
            );
        }
    } else {
        score += 0.1;
    }

    let bullets = entry.bullets.iter().filter(|b| !b.trim().is_empty()).count();
    match bullets {
        0 => issues.push(
            Issue::warning(SECTION, format!("No Bullet Points ({})", label))
                .with_fix("Add 3-5 bullets describing your achievements"),
        ),
        n if n < TARGET_BULLETS => {
            score += 0.2;
            issues.push(
                Issue::suggestion(SECTION, format!("Few Bullet Points ({})", label)).with_fix(
                    format!("Add {} more achievement bullets", TARGET_BULLETS - n),
                ),
            );
        }
        _ => score += 0.4,
    }

    score
}

fn entry_label(entry: &Experience, index: usize) -> String {
    match (entry.role.trim(), entry.organization.trim()) {
        ("", "") => format!("entry {}", index + 1),
        (role, "") => role.to_string(),
        ("", org) => org.to_string(),
        (role, org) => format!("{} at {}", role, org),
    }
}

/// Every dated field in the record, in document order.
fn document_dates(resume: &Resume) -> Vec<&str> {
    let mut dates = Vec::new();
    for e in &resume.experience {
        dates.push(e.start_date.as_str());
        dates.push(e.end_date.as_str());
    }
    dates.extend(resume.education.iter().map(|e| e.graduation_date.as_str()));
    dates.extend(resume.certifications.iter().map(|c| c.date.as_str()));
    dates.extend(resume.projects.iter().map(|p| p.date.as_str()));
    dates
}

/// Raises one warning per resume when any date strays from the majority
/// format. Returns whether the warning fired.
fn check_date_consistency(resume: &Resume, issues: &mut IssueCollector) -> bool {
    let formats: Vec<DateFormat> = document_dates(resume)
        .into_iter()
        .filter_map(DateFormat::classify)
        .collect();

    let Some(majority) = majority_format(&formats) else {
        return false;
    };

    let outliers = formats
        .iter()
        .filter(|f| !f.is_neutral() && **f != majority)
        .count();
    if outliers == 0 {
        return false;
    }

    issues.push(
        Issue::warning(SECTION, "Inconsistent Date Format").with_fix(format!(
            "Use the {} format (e.g. '{}') for all {} mismatched date{}",
            majority,
            majority.example(),
            outliers,
            if outliers == 1 { "" } else { "s" }
        )),
    );
    true
}

fn check_date_order(resume: &Resume, issues: &mut IssueCollector) {
    for (index, entry) in resume.experience.iter().enumerate() {
        let (Some(start), Some(end)) = (parse_month(&entry.start_date), parse_month(&entry.end_date))
        else {
            continue;
        };
        if end < start {
            issues.push(
                Issue::warning(
                    SECTION,
                    format!("Employment Dates Out of Order ({})", entry_label(entry, index)),
                )
                .with_fix("Make sure the end date comes after the start date"),
            );
        }
    }
}
