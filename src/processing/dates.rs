//! Resume date classification and parsing

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?,?\s+(\d{4})$")
        .expect("Invalid month-year regex")
});

static NUMERIC_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\s*/\s*(\d{4})$").expect("Invalid numeric date regex"));

static ISO_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})(?:-\d{1,2})?$").expect("Invalid ISO date regex"));

static YEAR_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})$").expect("Invalid year regex"));

const ONGOING: [&str; 5] = ["present", "current", "now", "ongoing", "today"];

/// The textual shape of a resume date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateFormat {
    /// `Jan 2020`, `January 2020`
    MonthYear,
    /// `01/2020`
    NumericMonthYear,
    /// `2020-01`
    IsoMonth,
    /// `2020`
    YearOnly,
    /// `Present`, `Current`
    Ongoing,
    Other,
}

impl DateFormat {
    pub fn classify(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let format = if ONGOING.contains(&text.to_lowercase().as_str()) {
            DateFormat::Ongoing
        } else if MONTH_YEAR.is_match(text) {
            DateFormat::MonthYear
        } else if NUMERIC_MONTH_YEAR.is_match(text) {
            DateFormat::NumericMonthYear
        } else if ISO_MONTH.is_match(text) {
            DateFormat::IsoMonth
        } else if YEAR_ONLY.is_match(text) {
            DateFormat::YearOnly
        } else {
            DateFormat::Other
        };
        Some(format)
    }

    /// Year-only and ongoing dates sit comfortably beside any other style.
    pub fn is_neutral(self) -> bool {
        matches!(self, DateFormat::YearOnly | DateFormat::Ongoing)
    }

    pub fn example(self) -> &'static str {
        match self {
            DateFormat::MonthYear => "Jan 2020",
            DateFormat::NumericMonthYear => "01/2020",
            DateFormat::IsoMonth => "2020-01",
            DateFormat::YearOnly => "2020",
            DateFormat::Ongoing => "Present",
            DateFormat::Other => "Jan 2020",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DateFormat::MonthYear => "Mon YYYY",
            DateFormat::NumericMonthYear => "MM/YYYY",
            DateFormat::IsoMonth => "YYYY-MM",
            DateFormat::YearOnly => "YYYY",
            DateFormat::Ongoing => "Present",
            DateFormat::Other => "free-form",
        };
        write!(f, "{}", label)
    }
}

/// Most common non-neutral format, ties broken by first appearance.
pub fn majority_format(formats: &[DateFormat]) -> Option<DateFormat> {
    let mut counts: Vec<(DateFormat, usize)> = Vec::new();
    for format in formats.iter().filter(|f| !f.is_neutral()) {
        match counts.iter_mut().find(|(f, _)| f == format) {
            Some((_, count)) => *count += 1,
            None => counts.push((*format, 1)),
        }
    }
    // max_by_key keeps the last maximum, so walk in reverse to favour the earliest
    counts
        .into_iter()
        .rev()
        .max_by_key(|(_, count)| *count)
        .map(|(format, _)| format)
}

/// Parse a month-resolution date. Ongoing and free-form dates yield `None`.
pub fn parse_month(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Some(caps) = MONTH_YEAR.captures(text) {
        let month = month_number(&caps[1])?;
        let year = caps[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }
    if let Some(caps) = NUMERIC_MONTH_YEAR.captures(text) {
        let month = caps[1].parse().ok()?;
        let year = caps[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }
    if let Some(caps) = ISO_MONTH.captures(text) {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }
    if let Some(caps) = YEAR_ONLY.captures(text) {
        let year = caps[1].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

fn month_number(prefix: &str) -> Option<u32> {
    let month = match prefix.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" | "sept" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(DateFormat::classify("Jan 2020"), Some(DateFormat::MonthYear));
        assert_eq!(DateFormat::classify("September 2019"), Some(DateFormat::MonthYear));
        assert_eq!(DateFormat::classify("Sept. 2019"), Some(DateFormat::MonthYear));
        assert_eq!(DateFormat::classify("03/2021"), Some(DateFormat::NumericMonthYear));
        assert_eq!(DateFormat::classify("2021-03"), Some(DateFormat::IsoMonth));
        assert_eq!(DateFormat::classify("2021"), Some(DateFormat::YearOnly));
        assert_eq!(DateFormat::classify("Present"), Some(DateFormat::Ongoing));
        assert_eq!(DateFormat::classify("Summer 2019"), Some(DateFormat::Other));
        assert_eq!(DateFormat::classify("  "), None);
    }

    #[test]
    fn test_majority_ignores_neutral_formats() {
        use DateFormat::*;
        let formats = [YearOnly, MonthYear, Ongoing, MonthYear, NumericMonthYear, YearOnly];
        assert_eq!(majority_format(&formats), Some(MonthYear));
        assert_eq!(majority_format(&[YearOnly, Ongoing]), None);
    }

    #[test]
    fn test_majority_tie_goes_to_first_seen() {
        use DateFormat::*;
        assert_eq!(majority_format(&[NumericMonthYear, MonthYear]), Some(NumericMonthYear));
        assert_eq!(majority_format(&[MonthYear, NumericMonthYear]), Some(MonthYear));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("Mar 2020"), NaiveDate::from_ymd_opt(2020, 3, 1));
        assert_eq!(parse_month("11/2018"), NaiveDate::from_ymd_opt(2018, 11, 1));
        assert_eq!(parse_month("2018-07"), NaiveDate::from_ymd_opt(2018, 7, 1));
        assert_eq!(parse_month("Present"), None);
        assert_eq!(parse_month("13/2018"), None);
    }
}
