//! Output formatters for score and keyword reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{AtsError, Result};
use crate::processing::keyword_matcher::KeywordReport;
use crate::scoring::composer::ScoreResult;
use crate::scoring::issues::{Issue, Severity};
use crate::scoring::section::SectionScore;
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for rendering engine results in one output format
pub trait OutputFormatter {
    fn format_score(&self, result: &ScoreResult) -> Result<String>;
    fn format_keywords(&self, report: &KeywordReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with severity colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    show_fixes: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    show_fixes: bool,
}

/// Dispatches to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

// `write!` into a String cannot fail; map the error anyway so it propagates
fn fmt_err(err: std::fmt::Error) -> AtsError {
    AtsError::OutputFormatting(err.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, show_fixes: bool) -> Self {
        Self {
            use_colors,
            detailed,
            show_fixes,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n# {}\n", title)
        }
    }

    fn format_score_badge(&self, score: u8, passes: bool) -> String {
        let (badge, color) = match (score, passes) {
            (90..=100, _) => ("EXCELLENT", Color::Green),
            (_, true) => ("PASSING", Color::BrightGreen),
            (50..=69, false) => ("AT RISK", Color::Yellow),
            _ => ("FAILING", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn severity_tag(&self, severity: Severity) -> String {
        let (tag, color) = match severity {
            Severity::Critical => ("[CRITICAL]", Color::Red),
            Severity::Warning => ("[WARNING] ", Color::Yellow),
            Severity::Suggestion => ("[TIP]     ", Color::Cyan),
        };
        self.colorize(tag, color)
    }

    fn format_bar(&self, section: &SectionScore) -> String {
        const WIDTH: usize = 20;
        let filled = ((section.ratio() * WIDTH as f64).round() as usize).min(WIDTH);
        let bar = format!("{}{}", "#".repeat(filled), ".".repeat(WIDTH - filled));
        let color = match section.ratio() {
            r if r >= 0.8 => Color::Green,
            r if r >= 0.5 => Color::Yellow,
            _ => Color::Red,
        };
        self.colorize(&bar, color)
    }

    fn format_issue(&self, issue: &Issue) -> String {
        let mut line = format!(
            "  {} {} ({})\n",
            self.severity_tag(issue.severity),
            issue.title,
            issue.section
        );
        if self.show_fixes {
            if let Some(fix) = &issue.fix {
                line.push_str(&format!("             -> {}\n", fix));
            }
        }
        line
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_score(&self, result: &ScoreResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("ATS SCORE"));
        writeln!(
            output,
            "Overall: {}/100 {}",
            result.overall,
            self.format_score_badge(result.overall, result.passes_ats)
        )
        .map_err(fmt_err)?;
        writeln!(output, "{}", self.colorize(&result.summary, Color::Cyan)).map_err(fmt_err)?;

        output.push_str(&self.format_header("Sections"));
        for section in &result.sections {
            write!(
                output,
                "  {:<22} {} {:>5.1}/{:<3}",
                section.section.name(),
                self.format_bar(section),
                section.score,
                section.max_score
            )
            .map_err(fmt_err)?;
            match (&section.notes, self.detailed) {
                (Some(notes), true) => writeln!(output, "  {}", notes).map_err(fmt_err)?,
                _ => output.push('\n'),
            }
        }

        output.push_str(&self.format_header("Issues"));
        if result.issues.is_empty() {
            output.push_str("  No issues found\n");
        }
        for severity in [Severity::Critical, Severity::Warning, Severity::Suggestion] {
            if severity == Severity::Suggestion && !self.detailed {
                let count = result.issues_with(severity).count();
                if count > 0 {
                    writeln!(output, "  ... {} suggestions (use --detailed to list)", count)
                        .map_err(fmt_err)?;
                }
                continue;
            }
            for issue in result.issues_with(severity) {
                output.push_str(&self.format_issue(issue));
            }
        }

        Ok(output)
    }

    fn format_keywords(&self, report: &KeywordReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("KEYWORD COVERAGE"));
        let found = report.matches.iter().filter(|m| m.found).count();
        writeln!(
            output,
            "Coverage: {:.0}% ({} of {} keywords)",
            report.coverage * 100.0,
            found,
            report.matches.len()
        )
        .map_err(fmt_err)?;

        if report.matches.is_empty() {
            output.push_str("  No keywords found in the job description\n");
            return Ok(output);
        }

        output.push_str(&self.format_header("Keywords"));
        for m in &report.matches {
            let mark = if m.found {
                self.colorize("[x]", Color::Green)
            } else {
                self.colorize("[ ]", Color::Red)
            };
            writeln!(output, "  {} {}", mark, m.keyword).map_err(fmt_err)?;
        }

        if self.detailed && !report.near_matches.is_empty() {
            output.push_str(&self.format_header("Close Matches"));
            for near in &report.near_matches {
                writeln!(
                    output,
                    "  {} ~ {} ({:.0}% similar)",
                    near.keyword,
                    near.resume_term,
                    near.similarity * 100.0
                )
                .map_err(fmt_err)?;
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_score(&self, result: &ScoreResult) -> Result<String> {
        self.render(result)
    }

    fn format_keywords(&self, report: &KeywordReport) -> Result<String> {
        self.render(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(show_fixes: bool) -> Self {
        Self { show_fixes }
    }

    fn severity_badge(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "🔴 critical",
            Severity::Warning => "🟡 warning",
            Severity::Suggestion => "🔵 suggestion",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_score(&self, result: &ScoreResult) -> Result<String> {
        let mut output = String::new();

        output.push_str("# ATS Score Report\n\n");
        writeln!(output, "**Overall:** {}/100", result.overall).map_err(fmt_err)?;
        writeln!(
            output,
            "**Passes ATS:** {}\n",
            if result.passes_ats { "yes" } else { "no" }
        )
        .map_err(fmt_err)?;
        writeln!(output, "> {}\n", result.summary).map_err(fmt_err)?;

        output.push_str("## Sections\n\n");
        output.push_str("| Section | Score | Max | Notes |\n");
        output.push_str("|---------|-------|-----|-------|\n");
        for section in &result.sections {
            writeln!(
                output,
                "| {} | {:.1} | {} | {} |",
                section.section,
                section.score,
                section.max_score,
                section.notes.as_deref().unwrap_or("")
            )
            .map_err(fmt_err)?;
        }

        output.push_str("\n## Issues\n\n");
        if result.issues.is_empty() {
            output.push_str("No issues found.\n");
        }
        for issue in &result.issues {
            write!(
                output,
                "- **{}** ({}, {})",
                issue.title,
                issue.section,
                Self::severity_badge(issue.severity)
            )
            .map_err(fmt_err)?;
            match (&issue.fix, self.show_fixes) {
                (Some(fix), true) => writeln!(output, ": {}", fix).map_err(fmt_err)?,
                _ => output.push('\n'),
            }
        }

        Ok(output)
    }

    fn format_keywords(&self, report: &KeywordReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Keyword Coverage\n\n");
        writeln!(output, "**Coverage:** {:.0}%\n", report.coverage * 100.0).map_err(fmt_err)?;

        for m in &report.matches {
            writeln!(output, "- [{}] {}", if m.found { "x" } else { " " }, m.keyword)
                .map_err(fmt_err)?;
        }

        if !report.near_matches.is_empty() {
            output.push_str("\n## Close Matches\n\n");
            for near in &report.near_matches {
                writeln!(output, "- `{}` ~ `{}`", near.keyword, near.resume_term)
                    .map_err(fmt_err)?;
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::from_config(&OutputConfig {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            show_fixes: true,
        })
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(
                config.color_output,
                config.detailed,
                config.show_fixes,
            ),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(config.show_fixes),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_score_report(&self, result: &ScoreResult, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_score(result)
    }

    pub fn generate_keyword_report(
        &self,
        report: &KeywordReport,
        format: OutputFormat,
    ) -> Result<String> {
        self.formatter(format).format_keywords(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };
    format!("{}_ats{}.{}", base_name, timestamp_suffix, extension)
}
