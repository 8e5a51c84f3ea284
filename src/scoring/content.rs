//! Content quality: share of bullets that lead with a strong verb and carry
//! a quantified result

use crate::processing::resume::Resume;
use crate::processing::text_processor::{
    first_word, has_metric, starts_with_action_verb, starts_with_weak_opener,
};
use crate::scoring::issues::{Issue, IssueCollector};
use crate::scoring::section::{Evaluation, Section};
use std::collections::BTreeMap;

const SECTION: Section = Section::ContentQuality;
const MIN_RATIO: f64 = 0.5;
const MAX_VERB_REPEATS: usize = 3;

pub fn score(resume: &Resume, issues: &mut IssueCollector) -> Evaluation {
    let bullets: Vec<&str> = resume
        .all_bullets()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect();

    if bullets.is_empty() {
        issues.push(
            Issue::warning(SECTION, "No Achievement Bullets")
                .with_fix("Describe each role with bullets that start with a verb and end with a result"),
        );
        return Evaluation::new(0.0);
    }

    let total = bullets.len() as f64;
    let action = bullets.iter().filter(|b| starts_with_action_verb(b)).count();
    let quantified = bullets.iter().filter(|b| has_metric(b)).count();
    let action_ratio = action as f64 / total;
    let metric_ratio = quantified as f64 / total;

    if action_ratio < MIN_RATIO || metric_ratio < MIN_RATIO {
        let fix = match (action_ratio < MIN_RATIO, metric_ratio < MIN_RATIO) {
            (true, true) => "Open bullets with verbs like 'Led' or 'Reduced' and add numbers, percentages or amounts",
            (true, false) => "Open bullets with strong verbs like 'Led', 'Built' or 'Reduced'",
            _ => "Add numbers, percentages or amounts to show the scale of each result",
        };
        issues.push(Issue::warning(SECTION, "Weak Action Verbs or Missing Metrics").with_fix(fix));
    }

    let weak = bullets.iter().filter(|b| starts_with_weak_opener(b)).count();
    if weak > 0 {
        issues.push(
            Issue::suggestion(SECTION, "Passive Phrasing").with_fix(format!(
                "Rewrite {} bullet{} that begin with phrases like 'Responsible for'",
                weak,
                if weak == 1 { "" } else { "s" }
            )),
        );
    }

    let mut openers: BTreeMap<String, usize> = BTreeMap::new();
    for word in bullets.iter().filter_map(|b| first_word(b)) {
        *openers.entry(word).or_insert(0) += 1;
    }
    let repeated: Vec<&str> = openers
        .iter()
        .filter(|(_, count)| **count > MAX_VERB_REPEATS)
        .map(|(word, _)| word.as_str())
        .collect();
    if !repeated.is_empty() {
        issues.push(
            Issue::suggestion(SECTION, "Repetitive Action Verbs")
                .with_fix(format!("Vary bullets that start with: {}", repeated.join(", "))),
        );
    }

    let points = f64::from(SECTION.max_points()) * (0.5 * action_ratio + 0.5 * metric_ratio);
    Evaluation::new(points).with_notes(format!(
        "{}/{} action-led, {}/{} quantified",
        action,
        bullets.len(),
        quantified,
        bullets.len()
    ))
}
