//! Configuration management for the ATS scorer
//!
//! Only presentation and keyword-matching knobs live here. Section maxima
//! and the pass threshold are fixed so scores stay comparable.

use crate::error::{AtsError, Result};
use crate::processing::keyword_matcher::{DEFAULT_MAX_KEYWORDS, KEYWORD_CEILING};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub max_keywords: usize,
    pub near_match_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub show_fixes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: MatchingConfig {
                max_keywords: DEFAULT_MAX_KEYWORDS,
                near_match_threshold: 0.88,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                show_fixes: true,
            },
        }
    }
}

impl Config {
    /// Load from `path`, writing defaults there on first run.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-scorer")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.matching.max_keywords == 0 {
            return Err(AtsError::Configuration(
                "matching.max_keywords must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.matching.near_match_threshold) {
            return Err(AtsError::Configuration(format!(
                "matching.near_match_threshold must be within 0.0..=1.0, got {}",
                self.matching.near_match_threshold
            )));
        }
        Ok(())
    }

    /// Keyword limit with the hard ceiling applied.
    pub fn keyword_limit(&self) -> usize {
        self.matching.max_keywords.min(KEYWORD_CEILING)
    }
}
