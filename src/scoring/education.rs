//! Education: best entry wins; certifications earn partial credit on their own

use crate::processing::resume::{Education, Resume};
use crate::scoring::issues::{Issue, IssueCollector};
use crate::scoring::section::{Evaluation, Section};

const SECTION: Section = Section::Education;
const CERTIFICATION_ONLY_POINTS: f64 = 3.0;

pub fn score(resume: &Resume, issues: &mut IssueCollector) -> Evaluation {
    check_certifications(resume, issues);

    if resume.education.is_empty() {
        let has_certifications = resume
            .certifications
            .iter()
            .any(|c| !c.name.trim().is_empty());
        issues.push(
            Issue::warning(SECTION, "Missing Education")
                .with_fix("List your highest degree, institution and graduation date"),
        );
        return if has_certifications {
            Evaluation::new(CERTIFICATION_ONLY_POINTS).with_notes("certifications only")
        } else {
            Evaluation::new(0.0)
        };
    }

    let best = resume
        .education
        .iter()
        .enumerate()
        .map(|(index, entry)| score_entry(entry, index, issues))
        .fold(0.0_f64, f64::max);

    Evaluation::new(f64::from(SECTION.max_points()) * best)
        .with_notes(format!("{} entries", resume.education.len()))
}

fn score_entry(entry: &Education, index: usize, issues: &mut IssueCollector) -> f64 {
    let label = match entry.institution.trim() {
        "" => format!("entry {}", index + 1),
        institution => institution.to_string(),
    };
    let mut score = 0.0;

    if entry.degree.trim().is_empty() {
        issues.push(
            Issue::warning(SECTION, format!("Missing Degree ({})", label))
                .with_fix("Name the degree or qualification earned"),
        );
    } else {
        score += 0.4;
    }

    if entry.institution.trim().is_empty() {
        issues.push(
            Issue::warning(SECTION, format!("Missing Institution ({})", label))
                .with_fix("Name the school or university"),
        );
    } else {
        score += 0.4;
    }

    if entry.graduation_date.trim().is_empty() {
        issues.push(Issue::suggestion(
            SECTION,
            format!("Missing Graduation Date ({})", label),
        ));
    } else {
        score += 0.2;
    }

    score
}

fn check_certifications(resume: &Resume, issues: &mut IssueCollector) {
    for cert in &resume.certifications {
        if !cert.name.trim().is_empty() && cert.issuer.trim().is_empty() {
            issues.push(
                Issue::suggestion(SECTION, format!("Certification Missing Issuer ({})", cert.name.trim()))
                    .with_fix("Add the issuing body so screeners can verify it"),
            );
        }
    }
}
