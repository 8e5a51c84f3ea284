//! ATS scorer: deterministic resume scoring and job description keyword matching

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod scoring;

pub use config::Config;
pub use error::{AtsError, Result};
pub use processing::keyword_matcher::{match_job_description_keywords, KeywordMatch};
pub use processing::resume::Resume;
pub use scoring::calculate_ats_score;
pub use scoring::composer::ScoreResult;
pub use scoring::issues::{Issue, Severity};
pub use scoring::section::{Section, SectionScore};
