//! Output formatters for ranked match results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::matching::ScoredJob;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting ranked match results
pub trait OutputFormatter {
    fn format_results(&self, results: &[ScoredJob]) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and rich presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_score(&self, score: f64) -> String {
        let percentage = format!("{:.0}%", score * 100.0);
        let color = match score {
            s if s >= 0.7 => Color::Green,
            s if s >= 0.4 => Color::Yellow,
            _ => Color::Red,
        };
        if self.use_colors {
            percentage.color(color).bold().to_string()
        } else {
            percentage
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_results(&self, results: &[ScoredJob]) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n",
            self.colorize("🎯 JOB MATCH RESULTS", Color::Blue)
        ));
        output.push_str(&format!("Ranked {} postings\n\n", results.len()));

        if results.is_empty() {
            output.push_str("No job postings to rank.\n");
            return Ok(output);
        }

        for (i, job) in results.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} {} — {}\n",
                i + 1,
                self.format_score(job.score),
                self.colorize(&job.title, Color::White),
                job.company
            ));
            output.push_str(&format!("   📍 {}\n", job.location));
            output.push_str(&format!("   {}\n", self.colorize(&job.summary, Color::Cyan)));

            if !job.keywords.is_empty() {
                output.push_str(&format!(
                    "   Keywords: {}\n",
                    self.colorize(&job.keywords.join(", "), Color::BrightBlack)
                ));
            }

            if self.detailed {
                if !job.skills.primary_skills.is_empty() {
                    output.push_str(&format!(
                        "   Posting skills: {}\n",
                        job.skills.primary_skills.join(", ")
                    ));
                }
                if !job.apply_link.is_empty() {
                    output.push_str(&format!("   Apply: {}\n", job.apply_link));
                }
            }
            output.push('\n');
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
}

impl OutputFormatter for JsonFormatter {
    fn format_results(&self, results: &[ScoredJob]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(results)?)
        } else {
            Ok(serde_json::to_string(results)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_results(&self, results: &[ScoredJob]) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 🎯 Job Match Results\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Postings ranked:** {}\n\n",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                results.len()
            ));
        }

        if results.is_empty() {
            output.push_str("No job postings to rank.\n");
            return Ok(output);
        }

        output.push_str("| # | Score | Title | Company | Location |\n");
        output.push_str("|---|-------|-------|---------|----------|\n");
        for (i, job) in results.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {:.0}% | {} | {} | {} |\n",
                i + 1,
                job.score * 100.0,
                job.title,
                job.company,
                job.location
            ));
        }
        output.push('\n');

        for (i, job) in results.iter().enumerate() {
            output.push_str(&format!("## {}. {} ({:.0}%)\n\n", i + 1, job.title, job.score * 100.0));
            output.push_str(&format!("**{}** — {}\n\n", job.company, job.location));
            output.push_str(&format!("{}\n\n", job.summary));
            if !job.keywords.is_empty() {
                output.push_str(&format!("**Keywords:** `{}`\n\n", job.keywords.join("`, `")));
            }
            if !job.apply_link.is_empty() {
                output.push_str(&format!("[Apply here]({})\n\n", job.apply_link));
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
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate(&self, results: &[ScoredJob], format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_results(results),
            OutputFormat::Json => self.json_formatter.format_results(results),
            OutputFormat::Markdown => self.markdown_formatter.format_results(results),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_matches{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_matches{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_matches{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::SkillProfile;

    fn sample_results() -> Vec<ScoredJob> {
        vec![ScoredJob {
            title: "Python Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: "Python work".to_string(),
            apply_link: "https://example.com/apply".to_string(),
            score: 0.82,
            summary: "Skills Match (80%): Python".to_string(),
            skills: SkillProfile::default(),
            keywords: vec!["python".to_string()],
        }]
    }

    #[test]
    fn test_console_output_without_colors() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_results(&sample_results()).unwrap();
        assert!(output.contains("Python Engineer"));
        assert!(output.contains("82%"));
        assert!(output.contains("Keywords: python"));
    }

    #[test]
    fn test_console_output_empty() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_results(&[]).unwrap();
        assert!(output.contains("No job postings to rank."));
    }

    #[test]
    fn test_json_output_round_trips() {
        let formatter = JsonFormatter::new(true);
        let output = formatter.format_results(&sample_results()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["title"], "Python Engineer");
        assert_eq!(parsed[0]["score"], 0.82);
    }

    #[test]
    fn test_markdown_output_has_table() {
        let formatter = MarkdownFormatter::new(false);
        let output = formatter.format_results(&sample_results()).unwrap();
        assert!(output.contains("| # | Score | Title | Company | Location |"));
        assert!(output.contains("[Apply here](https://example.com/apply)"));
    }

    #[test]
    fn test_suggest_filename() {
        let name = suggest_filename(&OutputFormat::Json, "resume.pdf", false);
        assert_eq!(name, "resume_matches.json");
    }
}
