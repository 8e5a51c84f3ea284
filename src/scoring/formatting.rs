//! Formatting: deductions from a 10-point base for characters and bullet
//! shapes that trip up resume parsers

use crate::processing::resume::Resume;
use crate::processing::text_processor::word_count;
use crate::scoring::issues::{Issue, IssueCollector};
use crate::scoring::section::{Evaluation, Section};

const SECTION: Section = Section::Formatting;
const MAX_BULLET_WORDS: usize = 40;
const MIN_BULLET_WORDS: usize = 4;
const BULLET_GLYPHS: [char; 6] = ['•', '*', '-', '·', '▪', '●'];

pub fn score(resume: &Resume, issues: &mut IssueCollector) -> Evaluation {
    let fields = resume.text_fields();
    let bullets: Vec<&str> = resume
        .all_bullets()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect();
    let has_content = !resume.summary.trim().is_empty() || !bullets.is_empty();

    let mut points = f64::from(SECTION.max_points());
    let mut findings = Vec::new();

    if fields.iter().any(|f| f.contains('\t')) {
        points -= 3.0;
        findings.push("tabs");
        issues.push(
            Issue::warning(SECTION, "Tab Characters Detected")
                .with_fix("Replace tab characters with single spaces"),
        );
    }

    if fields.iter().any(|f| f.chars().any(is_stray_control)) {
        points -= 3.0;
        findings.push("control characters");
        issues.push(
            Issue::warning(SECTION, "Control Characters Detected")
                .with_fix("Remove non-printing characters copied from other documents"),
        );
    }

    let long = bullets
        .iter()
        .filter(|b| word_count(b) > MAX_BULLET_WORDS)
        .count();
    if long > 0 {
        points -= 1.0;
        issues.push(
            Issue::suggestion(SECTION, "Overly Long Bullet Points").with_fix(format!(
                "Split {} bullet{} into statements under {} words",
                long,
                plural(long),
                MAX_BULLET_WORDS
            )),
        );
    }

    let short = bullets
        .iter()
        .filter(|b| word_count(b) < MIN_BULLET_WORDS)
        .count();
    if short > 0 {
        points -= 1.0;
        issues.push(
            Issue::suggestion(SECTION, "Very Short Bullet Points").with_fix(format!(
                "Expand {} bullet{} with context and results",
                short,
                plural(short)
            )),
        );
    }

    let glyphs = bullets
        .iter()
        .filter(|b| b.starts_with(BULLET_GLYPHS))
        .count();
    if glyphs > 0 {
        points -= 1.0;
        issues.push(
            Issue::suggestion(SECTION, "Embedded Bullet Symbols")
                .with_fix("Remove leading bullet symbols; the template adds its own"),
        );
    }

    if !has_content {
        return Evaluation::new(0.0).with_notes("no summary or bullet text");
    }

    let evaluation = Evaluation::new(points);
    if findings.is_empty() {
        evaluation
    } else {
        evaluation.with_notes(format!("contains {}", findings.join(" and ")))
    }
}

/// Control characters other than ordinary line breaks and tabs (tabs are
/// reported separately).
fn is_stray_control(c: char) -> bool {
    c.is_control() && !matches!(c, '\n' | '\r' | '\t')
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::resume::Experience;
    use crate::scoring::issues::Severity;

    fn with_bullets(bullets: &[&str]) -> Resume {
        Resume {
            summary: "Operations lead with a record of measurable results".into(),
            experience: vec![Experience {
                bullets: bullets.iter().map(|b| b.to_string()).collect(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_bullets_score_full() {
        let mut issues = IssueCollector::new();
        let eval = score(
            &with_bullets(&["Reduced shipping delays by 20% across 3 sites"]),
            &mut issues,
        );
        assert_eq!(eval.points, 10.0);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_tabs_reported_once_per_resume() {
        let mut issues = IssueCollector::new();
        let eval = score(
            &with_bullets(&["\tReduced delays by 20% across sites", "\tCut\tcosts by 10% in Q3"]),
            &mut issues,
        );
        let tab_issues: Vec<_> = issues
            .issues_for(SECTION)
            .filter(|i| i.title.to_lowercase().contains("tab"))
            .collect();
        assert_eq!(tab_issues.len(), 1);
        assert_eq!(tab_issues[0].severity, Severity::Warning);
        assert_eq!(eval.points, 7.0);
    }

    #[test]
    fn test_control_characters_flagged() {
        let mut issues = IssueCollector::new();
        score(
            &with_bullets(&["Reduced delays\u{0007} by 20% across sites"]),
            &mut issues,
        );
        assert!(issues.issues_for(SECTION).any(|i| i.title.contains("Control")));
    }

    #[test]
    fn test_bullet_shape_suggestions() {
        let mut issues = IssueCollector::new();
        let long = "word ".repeat(45);
        let eval = score(&with_bullets(&["• Ran payroll", &long]), &mut issues);
        assert_eq!(eval.points, 7.0);
        assert_eq!(issues.count(Severity::Suggestion), 3);
    }

    #[test]
    fn test_no_content_scores_zero() {
        let mut issues = IssueCollector::new();
        let eval = score(&Resume::default(), &mut issues);
        assert_eq!(eval.points, 0.0);
        assert!(issues.is_empty());
    }
}
