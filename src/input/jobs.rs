//! Job list loading

use crate::error::{JobMatcherError, Result};
use crate::matching::JobPosting;
use std::path::Path;

/// Load a job list from a JSON file. The file must hold a JSON array of
/// posting objects; every field is optional and defaults to empty.
pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    if !path.exists() {
        return Err(JobMatcherError::InvalidInput(format!(
            "Job list does not exist: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&content)?;
    log::info!("Loaded {} job postings from {}", jobs.len(), path.display());
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_jobs_with_missing_fields() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"[{{"title": "Python Engineer", "description": "Python work"}}, {{}}]"#
        )
        .unwrap();

        let jobs = load_jobs(file.path()).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Python Engineer");
        assert_eq!(jobs[0].company, "");
        assert_eq!(jobs[1].title, "");
    }

    #[test]
    fn test_load_jobs_invalid_json() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_jobs(file.path()),
            Err(JobMatcherError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_jobs_missing_file() {
        assert!(matches!(
            load_jobs(Path::new("/nonexistent/jobs.json")),
            Err(JobMatcherError::InvalidInput(_))
        ));
    }
}
