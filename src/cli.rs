//! CLI interface for the job matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-matcher")]
#[command(about = "Resume-to-job matching and ranking tool")]
#[command(
    long_about = "Rank job postings against a resume using skill overlap, TF-IDF similarity, role intent, experience fit, and location fit"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank job postings against a resume
    Match {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job list JSON file
        #[arg(short, long)]
        jobs: PathBuf,

        /// Target job title (e.g. "Data Scientist")
        #[arg(short, long)]
        title: Option<String>,

        /// Preferred location (e.g. "California")
        #[arg(short, long, default_value = "")]
        location: String,

        /// Years of experience, or "no preference"
        #[arg(short, long, default_value = "0")]
        experience: String,

        /// Limit output to the top N results
        #[arg(long)]
        top: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Skill catalog commands
    Skills {
        #[command(subcommand)]
        action: SkillAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum SkillAction {
    /// List every skill in the catalog
    List,

    /// List skill categories
    Categories,

    /// Normalize a token to its canonical skill name
    Normalize {
        /// Token to normalize (e.g. "k8s")
        token: String,
    },

    /// Search the catalog by substring
    Search {
        /// Search query
        query: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert!(matches!(parse_output_format("console"), Ok(OutputFormat::Console)));
        assert!(matches!(parse_output_format("JSON"), Ok(OutputFormat::Json)));
        assert!(matches!(parse_output_format("md"), Ok(OutputFormat::Markdown)));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("resume.PDF");
        assert!(validate_file_extension(&path, &["pdf", "txt", "md"]).is_ok());

        let path = PathBuf::from("resume.docx");
        assert!(validate_file_extension(&path, &["pdf", "txt", "md"]).is_err());

        let path = PathBuf::from("resume");
        assert!(validate_file_extension(&path, &["pdf"]).is_err());
    }
}
