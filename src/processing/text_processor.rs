//! Text processing: job description tokenization and resume text checks

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid email regex")
});

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9()\-. ]{7,24}$").expect("Invalid phone regex"));

/// Characters that survive punctuation stripping because they carry meaning
/// in technical terms (`c++`, `c#`, `node.js`, `ci-cd`).
const KEEP_PUNCTUATION: [char; 4] = ['+', '#', '.', '-'];

pub const MIN_KEYWORD_LEN: usize = 3;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "across", "after", "again", "against", "all", "also", "am",
        "an", "and", "any", "are", "as", "at", "be", "because", "been", "before", "being",
        "below", "between", "both", "but", "by", "can", "could", "did", "do", "does",
        "doing", "down", "during", "each", "etc", "few", "for", "from", "further", "had",
        "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i",
        "if", "in", "including", "into", "is", "it", "its", "itself", "just", "may", "me",
        "more", "most", "must", "my", "no", "nor", "not", "now", "of", "off", "on", "once",
        "only", "or", "other", "our", "ours", "out", "over", "own", "same", "shall", "she",
        "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
        "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
        "until", "up", "upon", "us", "very", "was", "we", "were", "what", "when", "where",
        "which", "while", "who", "whom", "why", "will", "with", "within", "without",
        "would", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
});

static ACTION_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // leadership
        "led", "lead", "managed", "directed", "oversaw", "supervised", "headed",
        "spearheaded", "championed", "mentored", "coached", "trained", "drove",
        // building
        "built", "developed", "designed", "architected", "engineered", "created",
        "launched", "implemented", "established", "founded", "pioneered", "shipped",
        "deployed", "delivered", "introduced", "authored", "wrote",
        // improving
        "increased", "reduced", "improved", "optimized", "streamlined", "automated",
        "accelerated", "boosted", "cut", "grew", "expanded", "revamped", "transformed",
        "restructured", "modernized", "saved", "lowered", "raised",
        // analysis and advice
        "analyzed", "assessed", "evaluated", "audited", "forecasted", "modeled",
        "valued", "reconciled", "budgeted", "identified", "diagnosed", "advised",
        "recommended", "researched", "investigated", "quantified",
        // coordination
        "coordinated", "negotiated", "facilitated", "partnered", "collaborated",
        "presented", "secured", "won", "closed", "generated", "achieved", "resolved",
        "administered", "triaged", "monitored", "educated", "documented", "executed",
        "conducted", "performed", "prepared", "organized", "planned", "migrated",
    ]
    .into_iter()
    .collect()
});

/// Past-tense openers that read as passive or vague.
static WEAK_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "helped", "worked", "assisted", "participated", "involved", "tasked", "utilized",
        "used", "attended", "contributed", "handled", "supported",
    ]
    .into_iter()
    .collect()
});

const WEAK_OPENERS: [&str; 6] = [
    "responsible for",
    "duties included",
    "helped",
    "worked on",
    "assisted with",
    "tasked with",
];

const FIRST_PERSON: [&str; 5] = ["i", "me", "my", "mine", "myself"];

/// Normalize typographic punctuation to ASCII equivalents.
pub fn normalize_unicode(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2026}' => '.',
            _ => c,
        })
        .collect()
}

/// Split a job description into filtered lowercase tokens, keeping
/// duplicates and source order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = normalize_unicode(text).to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || KEEP_PUNCTUATION.contains(&c) {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .map(|raw| raw.trim_end_matches('.').trim_matches('-'))
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Deduplicated keywords in first-seen order. With a `limit`, the most
/// frequent tokens are kept (ties go to the earliest) and still emitted in
/// first-seen order.
pub fn extract_keywords(text: &str, limit: Option<usize>) -> Vec<String> {
    let tokens = tokenize(text);

    let mut order: Vec<String> = Vec::new();
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        let count = frequency.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.clone());
        }
        *count += 1;
    }

    match limit {
        Some(limit) if order.len() > limit => {
            let mut ranked: Vec<(usize, &String)> = order.iter().enumerate().collect();
            ranked.sort_by(|(ia, a), (ib, b)| {
                frequency[b.as_str()]
                    .cmp(&frequency[a.as_str()])
                    .then_with(|| ia.cmp(ib))
            });
            let mut kept: Vec<(usize, &String)> = ranked.into_iter().take(limit).collect();
            kept.sort_by_key(|(index, _)| *index);
            kept.into_iter().map(|(_, k)| k.clone()).collect()
        }
        _ => order,
    }
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Accepts international formats with 7 to 15 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    PHONE_REGEX.is_match(phone) && (7..=15).contains(&digits)
}

pub fn word_count(text: &str) -> usize {
    text.unicode_words().count()
}

pub fn first_word(text: &str) -> Option<String> {
    text.unicode_words().next().map(str::to_lowercase)
}

/// True if the bullet opens with a strong verb: a known action verb, or a
/// past-tense verb that is not on the weak list.
pub fn starts_with_action_verb(bullet: &str) -> bool {
    let Some(word) = first_word(bullet) else {
        return false;
    };
    if ACTION_VERBS.contains(word.as_str()) {
        return true;
    }
    word.chars().count() >= 5 && word.ends_with("ed") && !WEAK_VERBS.contains(word.as_str())
}

pub fn has_metric(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit() || c == '%' || c == '$')
}

pub fn starts_with_weak_opener(bullet: &str) -> bool {
    let lowered = bullet.trim_start().to_lowercase();
    WEAK_OPENERS.iter().any(|opener| lowered.starts_with(opener))
}

pub fn uses_first_person(text: &str) -> bool {
    text.unicode_words()
        .any(|w| FIRST_PERSON.contains(&w.to_lowercase().as_str()))
}
