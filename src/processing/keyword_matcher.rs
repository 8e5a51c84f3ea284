//! Job description keyword coverage against a resume

use crate::processing::resume::Resume;
use crate::processing::text_processor::{extract_keywords, normalize_unicode, MIN_KEYWORD_LEN};
use aho_corasick::AhoCorasick;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strsim::jaro_winkler;

/// Keywords returned when no limit is configured.
pub const DEFAULT_MAX_KEYWORDS: usize = 40;
/// Hard ceiling on the keyword list, whatever the configuration says.
pub const KEYWORD_CEILING: usize = 49;

const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub found: bool,
}

/// A missing keyword and the closest term the resume does contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearMatch {
    pub keyword: String,
    pub resume_term: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub matches: Vec<KeywordMatch>,
    pub coverage: f64,
    pub missing: Vec<String>,
    pub near_matches: Vec<NearMatch>,
}

pub struct KeywordMatcher {
    max_keywords: usize,
    near_match_threshold: f64,
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordMatcher {
    pub fn new() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            near_match_threshold: 0.88,
        }
    }

    pub fn with_limit(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords.clamp(1, KEYWORD_CEILING);
        self
    }

    pub fn with_near_match_threshold(mut self, threshold: f64) -> Self {
        self.near_match_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn max_keywords(&self) -> usize {
        self.max_keywords
    }

    /// Which job description keywords appear verbatim in the resume.
    pub fn match_keywords(&self, resume: &Resume, job_description: &str) -> Vec<KeywordMatch> {
        let keywords = extract_keywords(job_description, Some(self.max_keywords));
        if keywords.is_empty() {
            return Vec::new();
        }

        let text = resume_text(resume);
        let found = find_present(&keywords, &text);

        keywords
            .into_iter()
            .enumerate()
            .map(|(index, keyword)| KeywordMatch {
                keyword,
                found: found.contains(&index),
            })
            .collect()
    }

    /// Matches plus coverage, missing keywords and near-miss hints.
    pub fn report(&self, resume: &Resume, job_description: &str) -> KeywordReport {
        let matches = self.match_keywords(resume, job_description);
        let missing: Vec<String> = matches
            .iter()
            .filter(|m| !m.found)
            .map(|m| m.keyword.clone())
            .collect();

        let near_matches = if missing.is_empty() {
            Vec::new()
        } else {
            let terms = resume_terms(&resume_text(resume));
            missing
                .iter()
                .filter_map(|keyword| self.closest_term(keyword, &terms))
                .collect()
        };

        KeywordReport {
            coverage: coverage(&matches),
            matches,
            missing,
            near_matches,
        }
    }

    fn closest_term(&self, keyword: &str, terms: &[String]) -> Option<NearMatch> {
        terms
            .iter()
            .map(|term| (term, jaro_winkler(keyword, term)))
            .filter(|(_, similarity)| *similarity >= self.near_match_threshold)
            // first best wins so output follows resume order
            .fold(None, |best: Option<(&String, f64)>, candidate| match best {
                Some(b) if b.1 >= candidate.1 => Some(b),
                _ => Some(candidate),
            })
            .map(|(term, similarity)| NearMatch {
                keyword: keyword.to_string(),
                resume_term: term.clone(),
                similarity,
            })
    }
}

/// Which job description keywords appear verbatim (substring containment,
/// case-insensitive) in the resume. Empty descriptions yield an empty list.
pub fn match_job_description_keywords(resume: &Resume, job_description: &str) -> Vec<KeywordMatch> {
    KeywordMatcher::new().match_keywords(resume, job_description)
}

/// Fraction of keywords found; 0.0 for an empty list.
pub fn coverage(matches: &[KeywordMatch]) -> f64 {
    if matches.is_empty() {
        return 0.0;
    }
    matches.iter().filter(|m| m.found).count() as f64 / matches.len() as f64
}

/// Normalized, lowercased projection of the resume's searchable text:
/// summary, experience, education, skills and projects.
pub fn resume_text(resume: &Resume) -> String {
    let mut parts: Vec<&str> = vec![resume.summary.as_str()];
    for e in &resume.experience {
        parts.push(e.role.as_str());
        parts.push(e.organization.as_str());
        parts.extend(e.bullets.iter().map(String::as_str));
    }
    for e in &resume.education {
        parts.extend([e.degree.as_str(), e.field.as_str(), e.institution.as_str()]);
    }
    parts.extend(resume.all_skills());
    for p in &resume.projects {
        parts.push(p.title.as_str());
        parts.extend(p.bullets.iter().map(String::as_str));
    }

    let joined = parts
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    // same normalization the job description tokens went through
    normalize_unicode(&joined).to_lowercase()
}

/// Indices of keywords occurring anywhere in `text`. Overlapping search so
/// every keyword is tested independently, like a per-keyword `contains`.
fn find_present(keywords: &[String], text: &str) -> HashSet<usize> {
    let matcher = match AhoCorasick::new(keywords) {
        Ok(matcher) => matcher,
        Err(e) => {
            warn!("Falling back to linear keyword search: {}", e);
            return keywords
                .iter()
                .enumerate()
                .filter(|(_, k)| text.contains(k.as_str()))
                .map(|(i, _)| i)
                .collect();
        }
    };

    matcher
        .find_overlapping_iter(text)
        .map(|m| m.pattern().as_usize())
        .collect()
}

/// Distinct words of the projection, in order of first appearance.
fn resume_terms(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split(|c: char| c.is_whitespace() || c == ',' || c == '|' || c == '(' || c == ')')
        .map(|w| w.trim_end_matches(['.', ';', ':']))
        .filter(|w| w.chars().count() >= MIN_KEYWORD_LEN)
        .filter(|w| seen.insert(w.to_string()))
        .map(str::to_string)
        .collect()
}
