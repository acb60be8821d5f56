//! Dictionary-driven skill extraction for resumes and job descriptions
//!
//! Matching is whole-word and case-insensitive: an Aho-Corasick automaton
//! over the catalog finds candidate hits, and each hit is kept only when it
//! sits on word boundaries, so "Java" never matches inside "JavaScript".

use crate::matching::sections::ResumeSections;
use crate::matching::skills::SkillCatalog;
use aho_corasick::AhoCorasick;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Skills extracted from one document.
///
/// Invariants: `primary_skills` and `secondary_skills` are disjoint, both
/// sorted and case-insensitively deduplicated; `total_count` equals the
/// size of their union.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillProfile {
    pub primary_skills: Vec<String>,
    pub secondary_skills: Vec<String>,
    pub skill_frequency: BTreeMap<String, usize>,
    pub total_count: usize,
}

impl SkillProfile {
    /// Union of primary and secondary skills, in sorted order.
    pub fn all_skills(&self) -> Vec<String> {
        let mut all: BTreeSet<String> = self.primary_skills.iter().cloned().collect();
        all.extend(self.secondary_skills.iter().cloned());
        all.into_iter().collect()
    }
}

/// A loose, caller-supplied skill dictionary. Mirrors what external callers
/// send over the wire: either categories mapping to skill lists, or a flat
/// list. Non-string entries are filtered out silently.
#[derive(Debug, Clone)]
pub enum CustomSkillDict {
    Categories(Vec<(String, Vec<serde_json::Value>)>),
    Flat(Vec<serde_json::Value>),
}

pub struct SkillExtractor {
    automaton: AhoCorasick,
    canonical: Vec<String>,
}

impl SkillExtractor {
    /// Extractor over the global skill catalog.
    pub fn new() -> Self {
        let catalog = SkillCatalog::global();
        Self::with_skills(catalog.all_skills().iter().cloned())
    }

    /// Extractor over an explicit skill list. Entries are normalized
    /// through the catalog and deduplicated case-insensitively; the global
    /// catalog itself is never touched.
    pub fn with_skills<I>(skills: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let catalog = SkillCatalog::global();
        let mut seen: BTreeMap<String, String> = BTreeMap::new();
        for skill in skills {
            let canonical = catalog.normalize(&skill);
            if canonical.is_empty() {
                continue;
            }
            seen.entry(canonical.to_lowercase()).or_insert(canonical);
        }

        let canonical: Vec<String> = seen.into_values().collect();
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&canonical)
            .expect("failed to build skill automaton");

        Self { automaton, canonical }
    }

    /// Extractor from a caller-supplied dictionary. Falls back to the
    /// global catalog when the dictionary yields no usable entries.
    pub fn with_custom_dictionary(dict: &CustomSkillDict) -> Self {
        let entries: Vec<String> = match dict {
            CustomSkillDict::Categories(categories) => categories
                .iter()
                .flat_map(|(_, values)| values.iter())
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            CustomSkillDict::Flat(values) => values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        };

        if entries.is_empty() {
            log::warn!("custom skill dictionary contained no usable entries, using default catalog");
            return Self::new();
        }
        Self::with_skills(entries)
    }

    pub fn skill_count(&self) -> usize {
        self.canonical.len()
    }

    /// Count whole-word occurrences of every known skill in `text`,
    /// keyed by canonical name.
    fn count_matches(&self, text: &str) -> HashMap<usize, usize> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for mat in self.automaton.find_overlapping_iter(text) {
            if on_word_boundaries(text, mat.start(), mat.end()) {
                *counts.entry(mat.pattern().as_usize()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Extract skills from parsed resume sections.
    ///
    /// Skills found in the skills section become primary; skills found in
    /// experience/projects/summary/education become secondary. The `other`
    /// bucket is always scanned last so content misfiled by the section
    /// parser is never silently dropped.
    pub fn extract(&self, sections: &ResumeSections) -> SkillProfile {
        let mut primary: BTreeSet<String> = BTreeSet::new();
        let mut secondary: BTreeSet<String> = BTreeSet::new();
        let mut frequency: BTreeMap<String, usize> = BTreeMap::new();

        for (idx, count) in self.count_matches(&sections.skills) {
            let canonical = &self.canonical[idx];
            primary.insert(canonical.clone());
            *frequency.entry(canonical.clone()).or_insert(0) += count;
        }

        let narrative = format!(
            "{} {} {} {}",
            sections.experience, sections.projects, sections.summary, sections.education
        );
        for (idx, count) in self.count_matches(&narrative) {
            let canonical = &self.canonical[idx];
            if !primary.contains(canonical) {
                secondary.insert(canonical.clone());
            }
            *frequency.entry(canonical.clone()).or_insert(0) += count;
        }

        // Last-resort recovery and supplementary scan over the catch-all
        // bucket; known skills only gain frequency here.
        for (idx, count) in self.count_matches(&sections.other) {
            let canonical = &self.canonical[idx];
            if !primary.contains(canonical) {
                secondary.insert(canonical.clone());
            }
            *frequency.entry(canonical.clone()).or_insert(0) += count;
        }

        let total_count = primary.len() + secondary.len();
        log::debug!(
            "extracted {} skills ({} primary, {} secondary)",
            total_count,
            primary.len(),
            secondary.len()
        );

        SkillProfile {
            primary_skills: primary.into_iter().collect(),
            secondary_skills: secondary.into_iter().collect(),
            skill_frequency: frequency,
            total_count,
        }
    }

    /// Extract skills from a single text blob (job descriptions have no
    /// sections); every hit is primary.
    pub fn extract_from_text(&self, text: &str) -> SkillProfile {
        let mut primary: BTreeSet<String> = BTreeSet::new();
        let mut frequency: BTreeMap<String, usize> = BTreeMap::new();

        if !text.is_empty() {
            for (idx, count) in self.count_matches(text) {
                let canonical = &self.canonical[idx];
                primary.insert(canonical.clone());
                *frequency.entry(canonical.clone()).or_insert(0) += count;
            }
        }

        let total_count = primary.len();
        SkillProfile {
            primary_skills: primary.into_iter().collect(),
            secondary_skills: Vec::new(),
            skill_frequency: frequency,
            total_count,
        }
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word test for a match span. A boundary is only required on the
/// sides of the pattern that end in word characters, so entries like "C++"
/// still match before punctuation or whitespace.
fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let pattern = &text[start..end];
    let starts_with_word = pattern.chars().next().map(is_word_char).unwrap_or(false);
    let ends_with_word = pattern.chars().next_back().map(is_word_char).unwrap_or(false);

    if starts_with_word {
        if let Some(prev) = text[..start].chars().next_back() {
            if is_word_char(prev) {
                return false;
            }
        }
    }
    if ends_with_word {
        if let Some(next) = text[end..].chars().next() {
            if is_word_char(next) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::sections::parse_sections;

    fn sections_with_skills(skills: &str) -> ResumeSections {
        ResumeSections {
            skills: skills.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_whole_word_matching() {
        let extractor = SkillExtractor::new();
        let profile = extractor.extract_from_text("Deep JavaScript experience");
        assert!(profile.primary_skills.contains(&"JavaScript".to_string()));
        assert!(!profile.primary_skills.contains(&"Java".to_string()));

        let profile = extractor.extract_from_text("Java and JavaScript");
        assert!(profile.primary_skills.contains(&"Java".to_string()));
        assert!(profile.primary_skills.contains(&"JavaScript".to_string()));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let extractor = SkillExtractor::new();
        let profile = extractor.extract_from_text("experience with PYTHON and docker");
        assert!(profile.primary_skills.contains(&"Python".to_string()));
        assert!(profile.primary_skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_punctuated_skill_names() {
        let extractor = SkillExtractor::new();
        let profile = extractor.extract_from_text("Strong C++ and C# background.");
        assert!(profile.primary_skills.contains(&"C++".to_string()));
        assert!(profile.primary_skills.contains(&"C#".to_string()));
    }

    #[test]
    fn test_primary_vs_secondary() {
        let sections = ResumeSections {
            skills: "Python, Docker".to_string(),
            experience: "Built services in Go, deployed with Docker".to_string(),
            ..Default::default()
        };
        let extractor = SkillExtractor::new();
        let profile = extractor.extract(&sections);

        assert!(profile.primary_skills.contains(&"Python".to_string()));
        assert!(profile.primary_skills.contains(&"Docker".to_string()));
        assert!(profile.secondary_skills.contains(&"Go".to_string()));
        // Docker was already primary; it must not appear twice.
        assert!(!profile.secondary_skills.contains(&"Docker".to_string()));
        assert_eq!(profile.skill_frequency["Docker"], 2);
    }

    #[test]
    fn test_disjoint_sets_and_total_count() {
        let text = "SKILLS\nPython, AWS\n\nEXPERIENCE\nUsed Python and Spark at work\n";
        let extractor = SkillExtractor::new();
        let profile = extractor.extract(&parse_sections(text));

        let overlap: Vec<_> = profile
            .primary_skills
            .iter()
            .filter(|s| profile.secondary_skills.contains(s))
            .collect();
        assert!(overlap.is_empty());
        assert_eq!(profile.total_count, profile.all_skills().len());
    }

    #[test]
    fn test_other_bucket_recovery() {
        let sections = ResumeSections {
            other: "unstructured text mentioning Python and Kubernetes".to_string(),
            ..Default::default()
        };
        let extractor = SkillExtractor::new();
        let profile = extractor.extract(&sections);
        assert!(profile.secondary_skills.contains(&"Python".to_string()));
        assert!(profile.secondary_skills.contains(&"Kubernetes".to_string()));
        assert!(profile.primary_skills.is_empty());
    }

    #[test]
    fn test_other_bucket_supplements_known_skills() {
        let sections = ResumeSections {
            skills: "Python".to_string(),
            other: "more Python here, plus Rust".to_string(),
            ..Default::default()
        };
        let extractor = SkillExtractor::new();
        let profile = extractor.extract(&sections);
        assert_eq!(profile.skill_frequency["Python"], 2);
        assert!(profile.secondary_skills.contains(&"Rust".to_string()));
        assert!(!profile.secondary_skills.contains(&"Python".to_string()));
    }

    #[test]
    fn test_empty_job_description() {
        let extractor = SkillExtractor::new();
        let profile = extractor.extract_from_text("");
        assert_eq!(profile.total_count, 0);
        assert!(profile.primary_skills.is_empty());
    }

    #[test]
    fn test_custom_dictionary_filters_non_strings() {
        use serde_json::json;
        let dict = CustomSkillDict::Flat(vec![json!("python"), json!(42), json!("k8s")]);
        let extractor = SkillExtractor::with_custom_dictionary(&dict);
        assert_eq!(extractor.skill_count(), 2);

        let profile = extractor.extract_from_text("Python and Kubernetes, no Docker counted");
        assert!(profile.primary_skills.contains(&"Python".to_string()));
        assert!(profile.primary_skills.contains(&"Kubernetes".to_string()));
        assert!(!profile.primary_skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_custom_dictionary_empty_falls_back() {
        use serde_json::json;
        let dict = CustomSkillDict::Flat(vec![json!(1), json!(null)]);
        let extractor = SkillExtractor::with_custom_dictionary(&dict);
        assert!(extractor.skill_count() > 250);
    }

    #[test]
    fn test_sorted_output() {
        let extractor = SkillExtractor::new();
        let profile = extractor.extract(&sections_with_skills("Rust, Python, AWS, Docker"));
        let mut sorted = profile.primary_skills.clone();
        sorted.sort();
        assert_eq!(profile.primary_skills, sorted);
    }
}
