//! Best-effort run metrics sink
//!
//! Appends one JSON line per ranking run to a configured file. Failures
//! are never surfaced to the caller; a missing or unwritable sink must
//! not affect ranking output.

use crate::matching::ScoredJob;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct RunMetrics {
    pub timestamp: DateTime<Utc>,
    pub job_count: usize,
    pub average_score: f64,
    pub top_score: f64,
}

impl RunMetrics {
    pub fn from_results(results: &[ScoredJob]) -> Self {
        let job_count = results.len();
        let average_score = if job_count == 0 {
            0.0
        } else {
            results.iter().map(|r| r.score).sum::<f64>() / job_count as f64
        };
        let top_score = results.first().map(|r| r.score).unwrap_or(0.0);

        Self {
            timestamp: Utc::now(),
            job_count,
            average_score,
            top_score,
        }
    }
}

/// Append the run metrics to the sink file as one JSON line. Best-effort:
/// every failure is swallowed and logged at debug level.
pub fn record(metrics: &RunMetrics, path: &Path) {
    let line = match serde_json::to_string(metrics) {
        Ok(line) => line,
        Err(e) => {
            log::debug!("skipping metrics record, serialization failed: {}", e);
            return;
        }
    };

    let result = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| writeln!(file, "{}", line));

    match result {
        Ok(()) => log::debug!("recorded run metrics to {}", path.display()),
        Err(e) => log::debug!("skipping metrics record for {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::SkillProfile;

    fn scored(score: f64) -> ScoredJob {
        ScoredJob {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            description: String::new(),
            apply_link: String::new(),
            score,
            summary: String::new(),
            skills: SkillProfile::default(),
            keywords: Vec::new(),
        }
    }

    #[test]
    fn test_metrics_from_results() {
        let metrics = RunMetrics::from_results(&[scored(0.8), scored(0.4)]);
        assert_eq!(metrics.job_count, 2);
        assert!((metrics.average_score - 0.6).abs() < 1e-9);
        assert_eq!(metrics.top_score, 0.8);
    }

    #[test]
    fn test_metrics_from_empty_results() {
        let metrics = RunMetrics::from_results(&[]);
        assert_eq!(metrics.job_count, 0);
        assert_eq!(metrics.average_score, 0.0);
        assert_eq!(metrics.top_score, 0.0);
    }

    #[test]
    fn test_record_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.jsonl");

        record(&RunMetrics::from_results(&[scored(0.5)]), &path);
        record(&RunMetrics::from_results(&[scored(0.9)]), &path);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed["top_score"], 0.9);
    }

    #[test]
    fn test_record_swallows_failures() {
        // Unwritable path: must not panic or error.
        record(
            &RunMetrics::from_results(&[]),
            Path::new("/nonexistent-dir/metrics.jsonl"),
        );
    }
}
