//! Professional summary: presence 5, length 5

use crate::processing::resume::Resume;
use crate::processing::text_processor::{uses_first_person, word_count};
use crate::scoring::issues::{Issue, IssueCollector};
use crate::scoring::section::{Evaluation, Section};

const SECTION: Section = Section::ProfessionalSummary;
const MIN_WORDS: usize = 25;
const MAX_WORDS: usize = 120;

pub fn score(resume: &Resume, issues: &mut IssueCollector) -> Evaluation {
    let summary = resume.summary.trim();
    if summary.is_empty() {
        issues.push(
            Issue::warning(SECTION, "Missing Professional Summary")
                .with_fix("Add a 2-4 sentence summary of your experience and strengths"),
        );
        return Evaluation::new(0.0);
    }

    let words = word_count(summary);
    let mut points = 5.0;

    if words < MIN_WORDS {
        points += 5.0 * words as f64 / MIN_WORDS as f64;
        issues.push(
            Issue::suggestion(SECTION, "Summary Too Short").with_fix(format!(
                "Expand the summary to at least {} words",
                MIN_WORDS
            )),
        );
    } else if words > MAX_WORDS {
        points += 3.0;
        issues.push(
            Issue::suggestion(SECTION, "Summary Too Long").with_fix(format!(
                "Trim the summary to under {} words",
                MAX_WORDS
            )),
        );
    } else {
        points += 5.0;
    }

    if uses_first_person(summary) {
        issues.push(
            Issue::suggestion(SECTION, "First-Person Pronouns in Summary")
                .with_fix("Drop 'I', 'me' and 'my'; write in implied first person"),
        );
    }

    Evaluation::new(points).with_notes(format!("{} words", words))
}
