//! Resume section segmentation
//!
//! Splits raw resume text into labeled buckets using header-detection
//! heuristics, with fallback strategies for resumes whose headers are not
//! recognizable. Every non-header, non-blank input line lands in exactly
//! one bucket; the `other` bucket guarantees totality.

use regex::Regex;
use std::sync::OnceLock;

/// The fixed set of section labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Skills,
    Experience,
    Education,
    Projects,
    Summary,
    Other,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Summary => "summary",
            Section::Other => "other",
        }
    }
}

/// Header keyword synonyms per section, in match priority order.
const SECTION_KEYWORDS: &[(Section, &[&str])] = &[
    (
        Section::Skills,
        &[
            "skills", "technical skills", "core competencies", "technologies", "expertise",
            "proficiencies", "technical expertise", "programming skills",
            "tools and technologies", "technical proficiencies",
        ],
    ),
    (
        Section::Experience,
        &[
            "experience", "work experience", "professional experience", "employment history",
            "work history", "career history", "professional background", "employment", "career",
        ],
    ),
    (
        Section::Education,
        &[
            "education", "academic background", "qualifications", "academic credentials",
            "educational background", "degrees", "academic history",
        ],
    ),
    (
        Section::Projects,
        &[
            "projects", "personal projects", "academic projects", "project experience",
            "selected projects", "key projects", "notable projects", "portfolio",
        ],
    ),
    (
        Section::Summary,
        &[
            "summary", "professional summary", "objective", "profile", "about me",
            "career objective", "professional profile", "executive summary", "career summary",
            "personal statement",
        ],
    ),
];

const MAX_HEADER_LEN: usize = 80;
const MAX_HEADER_WORDS: usize = 5;
const DECORATION_CHARS: &[char] = &['-', '=', '*', '#', '_', '~', ':', '|', '•', '·'];

/// Parsed resume text, bucketed by section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeSections {
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub projects: String,
    pub summary: String,
    pub other: String,
}

impl ResumeSections {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Skills => &self.skills,
            Section::Experience => &self.experience,
            Section::Education => &self.education,
            Section::Projects => &self.projects,
            Section::Summary => &self.summary,
            Section::Other => &self.other,
        }
    }

    fn buffer_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Skills => &mut self.skills,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Projects => &mut self.projects,
            Section::Summary => &mut self.summary,
            Section::Other => &mut self.other,
        }
    }

    /// True if any labeled bucket (everything except `other`) has content.
    pub fn has_labeled_content(&self) -> bool {
        !self.skills.is_empty()
            || !self.experience.is_empty()
            || !self.education.is_empty()
            || !self.projects.is_empty()
            || !self.summary.is_empty()
    }

    fn trim_all(&mut self) {
        for section in [
            Section::Skills,
            Section::Experience,
            Section::Education,
            Section::Projects,
            Section::Summary,
            Section::Other,
        ] {
            let buf = self.buffer_mut(section);
            *buf = buf.trim().to_string();
        }
    }
}

fn year_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{4}\b").expect("invalid year regex"))
}

fn inline_skills_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*(?:technical\s+)?skills?\s*[:\-]\s*(.+)$")
            .expect("invalid inline skills regex")
    })
}

fn inline_education_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*education\s*[:\-]\s*(.+)$").expect("invalid inline education regex")
    })
}

/// Heuristic test for whether a trimmed line looks like a section header.
fn is_section_header(line: &str) -> bool {
    if line.len() < 2 || line.len() >= MAX_HEADER_LEN {
        return false;
    }

    let has_alpha = line.chars().any(|c| c.is_alphabetic());

    // ALL-CAPS lines ("SKILLS", "WORK EXPERIENCE")
    if has_alpha && !line.chars().any(|c| c.is_lowercase()) {
        return true;
    }

    // Trailing colon ("Skills:")
    if line.ends_with(':') {
        return true;
    }

    // Decorative wrapping ("--- Skills ---", "== EDUCATION ==")
    if has_alpha {
        let first = line.chars().next().unwrap_or(' ');
        let last = line.chars().next_back().unwrap_or(' ');
        if DECORATION_CHARS.contains(&first) && DECORATION_CHARS.contains(&last) {
            return true;
        }
    }

    // Short capitalized line that is neither a bullet nor a dated entry
    let word_count = line.split_whitespace().count();
    if word_count <= MAX_HEADER_WORDS
        && line.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
        && !year_regex().is_match(line)
        && !line.starts_with(['-', '*', '•'])
    {
        return true;
    }

    false
}

/// Strip decorations and the trailing colon from a header line, lowercased.
fn clean_header(line: &str) -> String {
    line.trim_matches(|c: char| DECORATION_CHARS.contains(&c) || c.is_whitespace())
        .to_lowercase()
}

/// Map a cleaned header onto a section using three strategies in order:
/// exact match, keyword contained in the line, short line contained in a
/// keyword (abbreviated headers such as "Edu").
fn match_section(cleaned: &str) -> Option<Section> {
    if cleaned.is_empty() {
        return None;
    }

    for (section, keywords) in SECTION_KEYWORDS {
        if keywords.iter().any(|k| *k == cleaned) {
            return Some(*section);
        }
    }
    for (section, keywords) in SECTION_KEYWORDS {
        if keywords.iter().any(|k| cleaned.contains(k)) {
            return Some(*section);
        }
    }
    if cleaned.len() >= 3 {
        for (section, keywords) in SECTION_KEYWORDS {
            if keywords.iter().any(|k| k.contains(cleaned)) {
                return Some(*section);
            }
        }
    }
    None
}

/// Segment resume text into labeled sections.
///
/// Deterministic: identical input always yields identical assignment. Lines
/// keep their original whitespace inside the buffers; buffers are trimmed
/// as a whole before return.
pub fn parse_sections(text: &str) -> ResumeSections {
    let mut sections = ResumeSections::default();
    let mut current = Section::Other;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_section_header(trimmed) {
            if let Some(section) = match_section(&clean_header(trimmed)) {
                log::debug!("section header detected: {}", section.name());
                current = section;
                continue; // header line itself is not content
            }
        }

        let buf = sections.buffer_mut(current);
        buf.push_str(line);
        buf.push('\n');
    }

    if !sections.has_labeled_content() {
        log::debug!("no section headers recognized, running fallback segmentation");
        let mut fallback = fallback_parse(text);
        if fallback.has_labeled_content() {
            fallback.trim_all();
            return fallback;
        }
        // Last resort: keep the whole text searchable downstream.
        sections.other = text.trim().to_string();
        return sections;
    }

    sections.trim_all();
    sections
}

/// Recovery pass for resumes without detectable headers: inline
/// "Label: content" patterns first, then keyword-based re-segmentation over
/// short lines.
fn fallback_parse(text: &str) -> ResumeSections {
    let mut sections = ResumeSections::default();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(caps) = inline_skills_regex().captures(line) {
            sections.skills.push_str(caps[1].trim());
            sections.skills.push('\n');
        } else if let Some(caps) = inline_education_regex().captures(line) {
            sections.education.push_str(caps[1].trim());
            sections.education.push('\n');
        } else {
            sections.other.push_str(line);
            sections.other.push('\n');
        }
    }

    if sections.has_labeled_content() {
        return sections;
    }
    sections.other.clear();

    // Re-segment: a section keyword anywhere inside a short line moves the
    // cursor, even when the line failed the header heuristic.
    let mut current = Section::Other;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.split_whitespace().count() <= MAX_HEADER_WORDS {
            let lower = trimmed.to_lowercase();
            let hit = SECTION_KEYWORDS
                .iter()
                .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)));
            if let Some((section, _)) = hit {
                current = *section;
                continue;
            }
        }
        let buf = sections.buffer_mut(current);
        buf.push_str(line);
        buf.push('\n');
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "John Doe\n\
        Data Scientist\n\
        \n\
        PROFESSIONAL SUMMARY\n\
        Experienced data scientist with expertise in machine learning and Python.\n\
        \n\
        SKILLS\n\
        Python, TensorFlow, PyTorch, scikit-learn, AWS, Docker, Kubernetes\n\
        SQL, MongoDB, Spark, Pandas, NumPy\n\
        \n\
        EXPERIENCE\n\
        Senior Data Scientist at Google (2020-2023)\n\
        - Developed machine learning models using TensorFlow and PyTorch\n\
        \n\
        EDUCATION\n\
        Master of Science in Computer Science\n\
        Stanford University (2018-2020)\n\
        \n\
        PROJECTS\n\
        - Built a recommendation system using collaborative filtering\n";

    #[test]
    fn test_parses_all_sections() {
        let sections = parse_sections(SAMPLE);
        assert!(sections.skills.contains("TensorFlow"));
        assert!(sections.experience.contains("Google"));
        assert!(sections.education.contains("Stanford"));
        assert!(sections.projects.contains("recommendation system"));
        assert!(sections.summary.contains("Experienced data scientist"));
    }

    #[test]
    fn test_header_lines_are_dropped() {
        let sections = parse_sections(SAMPLE);
        assert!(!sections.skills.contains("SKILLS"));
        assert!(!sections.experience.contains("EXPERIENCE"));
    }

    #[test]
    fn test_header_heuristic() {
        assert!(is_section_header("SKILLS"));
        assert!(is_section_header("Skills:"));
        assert!(is_section_header("--- Education ---"));
        assert!(is_section_header("Work Experience"));
        assert!(!is_section_header("- Built data pipelines with Spark"));
        assert!(!is_section_header("Senior Engineer at Initech (2019)"));
        assert!(!is_section_header(
            "this is a long lowercase sentence that clearly is not a header because of its length"
        ));
    }

    #[test]
    fn test_colon_terminated_headers() {
        let text = "Skills:\nPython, Rust\nExperience:\nEngineer at Acme\n";
        let sections = parse_sections(text);
        assert!(sections.skills.contains("Python"));
        assert!(sections.experience.contains("Acme"));
    }

    #[test]
    fn test_abbreviated_header_matches_keyword() {
        assert_eq!(match_section("edu"), Some(Section::Education));
        assert_eq!(match_section("proj"), Some(Section::Projects));
        assert_eq!(match_section(""), None);
    }

    #[test]
    fn test_totality_no_lines_lost() {
        let sections = parse_sections(SAMPLE);
        let header_lines = ["PROFESSIONAL SUMMARY", "SKILLS", "EXPERIENCE", "EDUCATION", "PROJECTS"];
        let mut rebuilt: Vec<&str> = Vec::new();
        for section in [
            Section::Other,
            Section::Summary,
            Section::Skills,
            Section::Experience,
            Section::Education,
            Section::Projects,
        ] {
            rebuilt.extend(sections.get(section).lines());
        }
        let expected: Vec<&str> = SAMPLE
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !header_lines.contains(l))
            .collect();
        let mut rebuilt_trimmed: Vec<&str> = rebuilt.iter().map(|l| l.trim()).collect();
        rebuilt_trimmed.sort_unstable();
        let mut expected_sorted = expected.clone();
        expected_sorted.sort_unstable();
        assert_eq!(rebuilt_trimmed, expected_sorted);
    }

    #[test]
    fn test_inline_fallback() {
        let text = "jane doe\nskills: Python, Java, SQL\nworked at a bank for three years\n";
        let sections = parse_sections(text);
        assert!(sections.skills.contains("Python"));
        assert!(sections.other.contains("jane doe"));
        assert!(sections.other.contains("worked at a bank"));
    }

    #[test]
    fn test_headerless_text_lands_in_other() {
        let text = "an unstructured blob of text mentioning nothing in particular\n";
        let sections = parse_sections(text);
        assert!(!sections.has_labeled_content());
        assert_eq!(sections.other, text.trim());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(parse_sections(SAMPLE), parse_sections(SAMPLE));
    }

    #[test]
    fn test_empty_input() {
        let sections = parse_sections("");
        assert!(!sections.has_labeled_content());
        assert!(sections.other.is_empty());
    }
}
