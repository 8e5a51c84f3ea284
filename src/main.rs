//! ATS scorer: deterministic resume scoring and keyword matching

use ats_scorer::cli::{self, Cli, Commands, ConfigAction};
use ats_scorer::config::{Config, OutputFormat};
use ats_scorer::error::{AtsError, Result};
use ats_scorer::input::InputManager;
use ats_scorer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use ats_scorer::processing::keyword_matcher::KeywordMatcher;
use ats_scorer::scoring::calculate_ats_score;
use clap::Parser;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            output,
            detailed,
            save,
        } => {
            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| AtsError::InvalidInput(format!("Resume file: {}", e)))?;
            let format = resolve_format(output.as_deref(), &config)?;
            config.output.detailed |= detailed;
            // no ANSI escapes in saved reports
            config.output.color_output &= save.is_none();

            let mut input_manager = InputManager::new();
            let parsed = input_manager.load_resume(&resume).await?;

            info!("Scoring resume: {}", resume.display());
            let result = calculate_ats_score(&parsed);
            info!(
                "Overall score {}/100 with {} issues",
                result.overall,
                result.issues.len()
            );

            let generator = ReportGenerator::from_config(&config.output);
            let report = generator.generate_score_report(&result, format)?;
            emit(&report, save.as_deref(), format, &resume)
        }

        Commands::Keywords {
            resume,
            job,
            output,
            detailed,
            save,
        } => {
            cli::validate_file_extension(&resume, &["json"])
                .map_err(|e| AtsError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md", "markdown", "pdf"])
                .map_err(|e| AtsError::InvalidInput(format!("Job description file: {}", e)))?;
            let format = resolve_format(output.as_deref(), &config)?;
            config.output.detailed |= detailed;
            // no ANSI escapes in saved reports
            config.output.color_output &= save.is_none();

            let mut input_manager = InputManager::new();
            let parsed = input_manager.load_resume(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let matcher = KeywordMatcher::new()
                .with_limit(config.keyword_limit())
                .with_near_match_threshold(config.matching.near_match_threshold);
            debug!("Matching up to {} keywords", matcher.max_keywords());
            let report = matcher.report(&parsed, &job_text);
            info!(
                "Matched {} of {} keywords",
                report.matches.len() - report.missing.len(),
                report.matches.len()
            );

            let generator = ReportGenerator::from_config(&config.output);
            let rendered = generator.generate_keyword_report(&report, format)?;
            emit(&rendered, save.as_deref(), format, &resume)
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration ({})\n", config_path.display());
                println!("Keyword limit: {}", config.keyword_limit());
                println!(
                    "Near-match threshold: {:.2}",
                    config.matching.near_match_threshold
                );
                println!("Output format: {:?}", config.output.format);
                println!("Detailed: {}", config.output.detailed);
                println!("Colors: {}", config.output.color_output);
                println!("Show fixes: {}", config.output.show_fixes);
                Ok(())
            }
            Some(ConfigAction::Reset) => {
                Config::default().save_to(&config_path)?;
                println!("Configuration reset: {}", config_path.display());
                Ok(())
            }
            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
                Ok(())
            }
        },
    }
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(AtsError::InvalidInput),
        None => Ok(config.output.format),
    }
}

/// Print the report, or save it. A directory target gets a generated file name.
fn emit(content: &str, save: Option<&Path>, format: OutputFormat, resume: &Path) -> Result<()> {
    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(format, &resume.to_string_lossy(), true))
            } else {
                path.to_path_buf()
            };
            save_report_to_file(content, &path)?;
            info!("Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
