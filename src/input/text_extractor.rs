//! Text extraction from various file formats

use crate::error::{JobMatcherError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::fs;
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            JobMatcherError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path)?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Flatten markdown to plain text, one block per line. Formatting is
/// discarded; the downstream section parser only needs line structure.
fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
            _ => {}
        }
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_headers_become_lines() {
        let text = markdown_to_text("# SKILLS\n\nPython, Docker\n\n## EXPERIENCE\n\nBuilt things");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["SKILLS", "Python, Docker", "EXPERIENCE", "Built things"]);
    }

    #[test]
    fn test_markdown_list_items_preserved() {
        let text = markdown_to_text("- Python\n- Docker\n");
        assert_eq!(text, "Python\nDocker");
    }

    #[test]
    fn test_markdown_strips_emphasis() {
        let text = markdown_to_text("**Python** and _Docker_");
        assert_eq!(text, "Python and Docker");
    }
}
