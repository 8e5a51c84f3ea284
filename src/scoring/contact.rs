//! Contact info: name 2, email 3, phone 2, location 1, LinkedIn 1, title 1

use crate::processing::resume::Resume;
use crate::processing::text_processor::{is_valid_email, is_valid_phone};
use crate::scoring::issues::{Issue, IssueCollector};
use crate::scoring::section::{Evaluation, Section};

const SECTION: Section = Section::ContactInfo;

pub fn score(resume: &Resume, issues: &mut IssueCollector) -> Evaluation {
    let header = &resume.header;
    let mut points = 0.0;
    let mut present = 0;

    if header.name.trim().is_empty() {
        issues.push(
            Issue::critical(SECTION, "Missing Name")
                .with_fix("Put your full name at the top of the resume"),
        );
    } else {
        points += 2.0;
        present += 1;
    }

    let email = header.email.trim();
    if email.is_empty() {
        issues.push(
            Issue::critical(SECTION, "Missing Email Address")
                .with_fix("Add a professional email address to the header"),
        );
    } else if !is_valid_email(email) {
        issues.push(
            Issue::critical(SECTION, "Invalid Email Format")
                .with_fix(format!("Correct '{}' to the form name@domain.com", email)),
        );
    } else {
        points += 3.0;
        present += 1;
    }

    let phone = header.phone.trim();
    if phone.is_empty() {
        issues.push(
            Issue::warning(SECTION, "Missing Phone Number")
                .with_fix("Add a phone number recruiters can reach you on"),
        );
    } else if !is_valid_phone(phone) {
        points += 1.0;
        present += 1;
        issues.push(
            Issue::warning(SECTION, "Invalid Phone Format")
                .with_fix("Use digits with optional +, spaces, dashes or parentheses"),
        );
    } else {
        points += 2.0;
        present += 1;
    }

    for (value, label, weight) in [
        (&header.location, "Location", 1.0),
        (&header.linkedin, "LinkedIn Profile", 1.0),
        (&header.title, "Professional Title", 1.0),
    ] {
        if value.trim().is_empty() {
            issues.push(Issue::suggestion(SECTION, format!("Missing {}", label)));
        } else {
            points += weight;
            present += 1;
        }
    }

    Evaluation::new(points).with_notes(format!("{} of 6 contact fields usable", present))
}
