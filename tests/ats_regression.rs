//! Regression suite for the scoring engine and keyword matcher

use ats_scorer::{
    calculate_ats_score, match_job_description_keywords, Resume, ScoreResult, Section, Severity,
};
use serde_json::{json, Value};

fn software_engineer() -> Value {
    json!({
        "header": {
            "name": "Priya Raman",
            "title": "Senior Software Engineer",
            "email": "priya.raman@example.com",
            "phone": "+1 (415) 555-0142",
            "location": "San Francisco, CA",
            "linkedin": "linkedin.com/in/priyaraman"
        },
        "summary": "Backend engineer with eight years of experience building distributed payment systems in Rust and Go. Known for turning fragile services into reliable platforms, mentoring engineers, and partnering with product teams to ship features that customers rely on every day.",
        "experience": [
            {
                "role": "Senior Software Engineer",
                "organization": "Ledgerline",
                "start_date": "Mar 2020",
                "end_date": "Present",
                "location": "San Francisco, CA",
                "bullets": [
                    "Architected a Rust settlement service processing 40M transactions per day",
                    "Reduced p99 API latency by 63% through query and cache redesign",
                    "Mentored 5 engineers through promotion to senior level",
                    "Migrated 120 services to Kubernetes with zero customer downtime"
                ]
            },
            {
                "role": "Software Engineer",
                "organization": "Brightcart",
                "start_date": "Jun 2016",
                "end_date": "Feb 2020",
                "location": "Seattle, WA",
                "bullets": [
                    "Built a checkout pipeline handling $300M in annual sales",
                    "Automated release testing, cutting deploy time from 2 hours to 15 minutes",
                    "Designed an event schema adopted by 14 internal teams",
                    "Cut cloud spend by $1.1M a year by rightsizing 300 instances"
                ]
            }
        ],
        "education": [
            {
                "degree": "BSc",
                "field": "Computer Science",
                "institution": "University of Washington",
                "graduation_date": "Jun 2016"
            }
        ],
        "certifications": [
            { "name": "AWS Certified Solutions Architect", "issuer": "Amazon Web Services", "date": "Nov 2021" }
        ],
        "skills": {
            "languages": ["Rust", "Go", "Python", "SQL", "TypeScript"],
            "infrastructure": ["Kubernetes", "Terraform", "AWS", "PostgreSQL", "Kafka", "Redis", "gRPC"]
        }
    })
}

fn financial_analyst() -> Value {
    json!({
        "header": {
            "name": "Marcus Bell",
            "title": "Senior Financial Analyst",
            "email": "marcus.bell@example.com",
            "phone": "212-555-0187",
            "location": "New York, NY",
            "linkedin": "linkedin.com/in/marcusbell"
        },
        "summary": "Financial analyst with six years of experience in corporate planning, forecasting and valuation for consumer brands. Builds models that leadership trusts, explains variance in plain language, and partners with operations to turn budgets into measurable growth across regions.",
        "experience": [
            {
                "role": "Senior Financial Analyst",
                "organization": "Northgate Brands",
                "start_date": "Jan 2021",
                "end_date": "Present",
                "location": "New York, NY",
                "bullets": [
                    "Forecasted quarterly revenue for a $450M portfolio within 2% accuracy",
                    "Identified $12M in annual cost savings across 3 distribution centers",
                    "Presented monthly variance analysis to the CFO and 8 regional leads",
                    "Automated 15 recurring reports in SQL, freeing 2 days per month"
                ]
            },
            {
                "role": "Financial Analyst",
                "organization": "Harbor Capital",
                "start_date": "Jul 2018",
                "end_date": "Dec 2020",
                "location": "Boston, MA",
                "bullets": [
                    "Modeled 25 acquisition targets using DCF and comparable company analysis",
                    "Reconciled $80M in intercompany balances ahead of each quarterly close",
                    "Streamlined budget templates, saving 30 analyst hours per cycle",
                    "Audited 120 expense accounts, recovering $400K in duplicate payments"
                ]
            }
        ],
        "education": [
            {
                "degree": "BBA",
                "field": "Finance",
                "institution": "Boston College",
                "graduation_date": "May 2018"
            }
        ],
        "certifications": [
            { "name": "CFA Level II", "issuer": "CFA Institute", "date": "Aug 2020" }
        ],
        "skills": {
            "analysis": ["Financial Modeling", "Forecasting", "Valuation", "Variance Analysis", "Budgeting"],
            "tools": ["Excel", "SQL", "Tableau", "Power BI", "Hyperion", "SAP", "Python"]
        }
    })
}

fn clinical_nurse_leader() -> Value {
    json!({
        "header": {
            "name": "Elena Ortiz",
            "title": "Clinical Nurse Leader",
            "email": "elena.ortiz@example.org",
            "phone": "+1 312 555 0199",
            "location": "Chicago, IL",
            "linkedin": "linkedin.com/in/elenaortizrn"
        },
        "summary": "Registered nurse and clinical nurse leader with ten years of acute care experience in cardiac and surgical units. Focused on patient safety, evidence based practice and staff development, with a record of lowering readmissions and raising patient satisfaction scores.",
        "experience": [
            {
                "role": "Clinical Nurse Leader",
                "organization": "Lakeshore Medical Center",
                "start_date": "Apr 2019",
                "end_date": "Present",
                "location": "Chicago, IL",
                "bullets": [
                    "Led a 32-bed cardiac step-down unit with 45 nursing staff",
                    "Reduced 30-day readmissions by 18% through discharge education rounds",
                    "Implemented a sepsis screening protocol that cut response time by 40%",
                    "Coordinated 3 shared governance councils covering 150 clinical staff"
                ]
            },
            {
                "role": "Registered Nurse",
                "organization": "Mercy General Hospital",
                "start_date": "Aug 2014",
                "end_date": "Mar 2019",
                "location": "Chicago, IL",
                "bullets": [
                    "Monitored 6 post-surgical patients per shift on a busy surgical floor",
                    "Trained 20 new graduate nurses in telemetry and medication safety",
                    "Raised patient satisfaction scores from 78% to 92% over two years",
                    "Documented care plans for 1,200 admissions with zero charting audit findings"
                ]
            }
        ],
        "education": [
            {
                "degree": "MSN",
                "field": "Clinical Nurse Leader",
                "institution": "Loyola University Chicago",
                "graduation_date": "May 2019"
            }
        ],
        "certifications": [
            { "name": "CCRN", "issuer": "AACN", "date": "Oct 2017" }
        ],
        "skills": {
            "clinical": ["Patient Assessment", "Telemetry", "Sepsis Management", "Wound Care", "Medication Safety", "ACLS"],
            "leadership": ["Staff Development", "Quality Improvement", "Care Coordination", "Epic EHR", "Scheduling", "Patient Education"]
        }
    })
}

fn principal_consultant() -> Value {
    json!({
        "header": {
            "name": "Jonah Whitfield",
            "title": "Principal Consultant",
            "email": "jonah@whitfield-advisory.com",
            "phone": "+44 20 7946 0958",
            "location": "London, UK",
            "linkedin": "linkedin.com/in/jonahwhitfield"
        },
        "summary": "Management consultant with twelve years of experience leading operating model and supply chain transformations for retail and logistics clients. Trusted by executives to frame complex problems, align stakeholders and deliver programs that hold their value long after the engagement ends.",
        "experience": [
            {
                "role": "Principal Consultant",
                "organization": "Crestmoor Partners",
                "start_date": "Feb 2017",
                "end_date": "Present",
                "location": "London, UK",
                "bullets": [
                    "Directed a 14-person team through a $60M supply chain redesign",
                    "Negotiated vendor terms that lowered logistics spend by 11%",
                    "Won 9 follow-on engagements worth over $25M in total fees",
                    "Built a pricing model that raised gross margin by 3 points across 400 stores"
                ]
            },
            {
                "role": "Senior Consultant",
                "organization": "Atlas Strategy Group",
                "start_date": "Sep 2012",
                "end_date": "Jan 2017",
                "location": "Manchester, UK",
                "bullets": [
                    "Restructured store operations for 220 retail locations",
                    "Facilitated 40 executive workshops on operating model design",
                    "Analyzed pricing data for 3 grocers, lifting margin by 1.5 points",
                    "Mentored 12 analysts, with 7 promoted to consultant within 2 years"
                ]
            }
        ],
        "education": [
            {
                "degree": "MBA",
                "field": "Strategy and Operations",
                "institution": "London Business School",
                "graduation_date": "Jul 2012"
            }
        ],
        "certifications": [
            { "name": "Certified Management Consultant", "issuer": "Chartered Management Institute", "date": "Mar 2016" }
        ],
        "skills": {
            "consulting": ["Operating Model Design", "Supply Chain", "Change Management", "Stakeholder Management", "Pricing Strategy", "Due Diligence"],
            "tools": ["Excel", "PowerPoint", "Alteryx", "Tableau", "SQL", "Visio"]
        }
    })
}

fn panel() -> Vec<(&'static str, Resume)> {
    vec![
        ("software engineer", Resume::from_value(&software_engineer())),
        ("financial analyst", Resume::from_value(&financial_analyst())),
        ("clinical nurse leader", Resume::from_value(&clinical_nurse_leader())),
        ("principal consultant", Resume::from_value(&principal_consultant())),
    ]
}

fn assert_bounds(result: &ScoreResult) {
    assert!(result.overall <= 100);
    assert_eq!(result.passes_ats, result.overall >= 70);
    assert!(!result.summary.is_empty());
    assert_eq!(result.sections.len(), Section::ALL.len());
    for (score, section) in result.sections.iter().zip(Section::ALL) {
        assert_eq!(score.section, section);
        assert_eq!(score.max_score, section.max_points());
        assert!(score.score >= 0.0 && score.score <= f64::from(score.max_score));
    }
}

#[test]
fn test_panel_resumes_are_fully_populated() {
    for (label, resume) in panel() {
        assert!(resume.experience.len() >= 2, "{}", label);
        for entry in &resume.experience {
            assert!(entry.bullets.len() >= 4, "{}: {}", label, entry.role);
            assert!(entry.bullets.iter().all(|b| b.chars().any(|c| c.is_ascii_digit())));
        }
        assert!(!resume.certifications.is_empty(), "{}", label);
        for education in &resume.education {
            assert!(!education.degree.is_empty() && !education.field.is_empty(), "{}", label);
        }
    }
}

#[test]
fn test_cross_industry_panel_scores_high_and_evenly() {
    let scores: Vec<f64> = panel()
        .iter()
        .map(|(label, resume)| {
            let result = calculate_ats_score(resume);
            assert_bounds(&result);
            assert!(
                (90..=100).contains(&result.overall),
                "{} scored {}: {:?}",
                label,
                result.overall,
                result.issues
            );
            assert!(result.passes_ats, "{} should pass", label);
            f64::from(result.overall)
        })
        .collect();

    let max = scores.iter().cloned().fold(f64::MIN, f64::max);
    let min = scores.iter().cloned().fold(f64::MAX, f64::min);
    assert!(max - min < 20.0);

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64;
    assert!(variance.sqrt() / mean < 0.05);
}

#[test]
fn test_well_formed_resumes_have_no_critical_issues() {
    for (label, resume) in panel() {
        let result = calculate_ats_score(&resume);
        assert_eq!(result.critical_count(), 0, "{}: {:?}", label, result.issues);
    }
}

#[test]
fn test_scoring_is_deterministic() {
    for (_, resume) in panel() {
        let first = calculate_ats_score(&resume);
        let second = calculate_ats_score(&resume);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_empty_resume_scores_zero() {
    let result = calculate_ats_score(&Resume::default());
    assert_bounds(&result);
    assert_eq!(result.overall, 0);
    assert!(!result.passes_ats);
    assert!(result.critical_count() > 0);
}

#[test]
fn test_missing_skills_is_critical() {
    let mut resume = Resume::from_value(&software_engineer());
    resume.skills.clear();

    let result = calculate_ats_score(&resume);
    assert!(result
        .issues
        .iter()
        .any(|i| i.section == Section::Skills && i.severity == Severity::Critical));
    let skills = &result.sections[4];
    assert_eq!(skills.section, Section::Skills);
    assert_eq!(skills.score, 0.0);
}

#[test]
fn test_tab_characters_are_flagged() {
    let mut value = financial_analyst();
    value["experience"][0]["bullets"][1] =
        json!("Identified\t$12M in annual cost savings across 3 distribution centers");

    let result = calculate_ats_score(&Resume::from_value(&value));
    let tab_issues: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.title.to_lowercase().contains("tab"))
        .collect();
    assert_eq!(tab_issues.len(), 1);
    assert_eq!(tab_issues[0].section, Section::Formatting);
    assert!(result.sections[5].score < 10.0);
}

#[test]
fn test_inconsistent_date_formats_are_flagged_once() {
    let mut value = clinical_nurse_leader();
    value["experience"][1]["start_date"] = json!("08/2014");
    value["experience"][1]["end_date"] = json!("2019-03");

    let result = calculate_ats_score(&Resume::from_value(&value));
    let date_issues: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.title == "Inconsistent Date Format")
        .collect();
    assert_eq!(date_issues.len(), 1);
    assert_eq!(date_issues[0].severity, Severity::Warning);
    assert!(date_issues[0].fix.as_deref().unwrap_or("").contains("Jan 2020"));
}

#[test]
fn test_year_only_dates_do_not_count_as_inconsistent() {
    let mut value = principal_consultant();
    value["education"][0]["graduation_date"] = json!("2012");

    let result = calculate_ats_score(&Resume::from_value(&value));
    assert!(!result.issues.iter().any(|i| i.title == "Inconsistent Date Format"));
}

#[test]
fn test_keywords_empty_description() {
    let resume = Resume::from_value(&software_engineer());
    assert!(match_job_description_keywords(&resume, "").is_empty());
    assert!(match_job_description_keywords(&resume, "  \n ").is_empty());
}

#[test]
fn test_keywords_are_capped_and_unique() {
    let resume = Resume::from_value(&software_engineer());
    let phrase = "rust kubernetes terraform payments latency mentoring postgres kafka ";
    let matches = match_job_description_keywords(&resume, &phrase.repeat(100));
    assert!(matches.len() < 50);
    assert_eq!(matches.len(), 8);

    let wide: String = (0..500).map(|i| format!("skill{} ", i)).collect();
    assert!(match_job_description_keywords(&resume, &wide).len() < 50);
}

#[test]
fn test_keywords_found_in_resume_text() {
    let resume = Resume::from_value(&software_engineer());
    let matches = match_job_description_keywords(
        &resume,
        "We want a Rust engineer with Kubernetes, Terraform and Snowflake experience.",
    );

    let found = |k: &str| matches.iter().find(|m| m.keyword == k).map(|m| m.found);
    assert_eq!(found("rust"), Some(true));
    assert_eq!(found("kubernetes"), Some(true));
    assert_eq!(found("terraform"), Some(true));
    assert_eq!(found("snowflake"), Some(false));
    assert!(matches.iter().all(|m| m.keyword == m.keyword.to_lowercase()));
}

#[test]
fn test_coercion_never_fails() {
    let inputs = vec![
        json!(null),
        json!(42),
        json!("resume"),
        json!([1, 2, 3]),
        json!({ "header": "Jane" }),
        json!({ "experience": { "role": "Analyst", "bullets": "Led 3 audits" } }),
        json!({ "skills": "Excel, SQL; Tableau" }),
        json!({ "skills": [1, true, "Go"] }),
        json!({ "education": [null, { "degree": 7 }], "summary": false }),
    ];

    for input in inputs {
        let result = calculate_ats_score(&Resume::from_value(&input));
        assert_bounds(&result);
    }
}

#[test]
fn test_result_json_shape() {
    let result = calculate_ats_score(&Resume::from_value(&software_engineer()));
    let json = serde_json::to_value(&result).unwrap();
    for key in ["overall", "passesATS", "summary", "issues", "sections"] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(json["sections"][0]["section"], "Contact Info");
}
