//! Five-signal job scoring and ranking
//!
//! Combines skill overlap, TF-IDF semantic similarity, role intent,
//! experience fit and location fit into one weighted score per posting.
//! The pipeline is a pure function of its inputs and never fails on
//! malformed input; missing data degrades to zero-credit sub-scores.

use crate::config::ScoringConfig;
use crate::matching::extractor::{SkillExtractor, SkillProfile};
use crate::matching::roles::infer_roles;
use crate::matching::sections::parse_sections;
use crate::matching::skills::title_case;
use crate::matching::tfidf::similarity_scores;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Cap on the skill-overlap denominator, so verbose postings that
/// enumerate a dozen skills are not unfairly penalized.
pub const SKILL_OVERLAP_CAP: usize = 7;

/// Amplification applied to raw TF-IDF cosine similarity. Short resumes
/// against short postings typically land around 0.1 to 0.3, so the raw
/// value is rescaled into a comparable [0, 1] range. Tuned empirically;
/// changing it changes observable ranking behavior.
pub const SEMANTIC_BOOST: f64 = 3.0;

const TOP_KEYWORDS: usize = 5;
const SUMMARY_SKILLS: usize = 3;

/// One job posting as supplied by the caller. Any field may be absent in
/// the source JSON and defaults to an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub apply_link: String,
}

/// A posting with its computed score, one-line summary and the skill
/// evidence backing the score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub apply_link: String,
    pub score: f64,
    pub summary: String,
    pub skills: SkillProfile,
    pub keywords: Vec<String>,
}

/// Candidate experience parsed from free text. Never an error: "no
/// preference" sets the flag, otherwise the first digit run wins, and
/// text with no digits defaults to zero years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceTarget {
    pub years: u32,
    pub accepts_any: bool,
}

pub fn parse_experience(experience: &str) -> ExperienceTarget {
    let lowered = experience.to_lowercase();
    if lowered.contains("no preference") {
        return ExperienceTarget {
            years: 0,
            accepts_any: true,
        };
    }

    let digits: String = experience
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let years = digits.parse().unwrap_or(0);
    ExperienceTarget {
        years,
        accepts_any: false,
    }
}

pub struct MatchEngine {
    extractor: SkillExtractor,
    weights: ScoringConfig,
    required_years_re: Regex,
}

impl MatchEngine {
    pub fn new(weights: ScoringConfig) -> Self {
        Self {
            extractor: SkillExtractor::new(),
            weights,
            required_years_re: Regex::new(r"(\d+)\+?\s*years?").expect("invalid years regex"),
        }
    }

    /// Extractor override, used when a caller supplies a custom skill
    /// dictionary.
    pub fn with_extractor(extractor: SkillExtractor, weights: ScoringConfig) -> Self {
        Self {
            extractor,
            weights,
            required_years_re: Regex::new(r"(\d+)\+?\s*years?").expect("invalid years regex"),
        }
    }

    /// Score and rank every posting against the resume, descending by
    /// score. An empty job list returns immediately.
    pub fn rank_jobs(
        &self,
        resume_text: &str,
        jobs: &[JobPosting],
        title: Option<&str>,
        location: &str,
        experience: &str,
    ) -> Vec<ScoredJob> {
        if jobs.is_empty() {
            return Vec::new();
        }

        let sections = parse_sections(resume_text);
        let resume_profile = self.extractor.extract(&sections);
        let resume_skills: BTreeSet<String> = resume_profile
            .all_skills()
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        let roles = infer_roles(&sections, title);
        let target = parse_experience(experience);
        let user_location = location.trim().to_lowercase();

        let descriptions: Vec<String> = jobs.iter().map(|j| j.description.clone()).collect();
        let semantic_raw = similarity_scores(resume_text, &descriptions);

        let mut scored: Vec<ScoredJob> = Vec::with_capacity(jobs.len());
        for (job, raw_similarity) in jobs.iter().zip(semantic_raw) {
            let job_profile = self.extractor.extract_from_text(&job.description);
            let matched = matched_skills(&resume_skills, &job_profile);

            let skill_score = skill_overlap_score(matched.len(), job_profile.total_count);
            let semantic_score = (raw_similarity * SEMANTIC_BOOST).min(1.0);
            let role_score = role_score(&roles, job);
            let experience_score = self.experience_score(&job.description, target);
            let location_score = location_score(&job.location, &user_location);

            let weighted = self.weights.skill_weight * skill_score
                + self.weights.semantic_weight * semantic_score
                + self.weights.role_weight * role_score
                + self.weights.experience_weight * experience_score
                + self.weights.location_weight * location_score;
            let score = round2(weighted.min(1.0));

            log::debug!(
                "scored '{}': skill={:.2} semantic={:.2} role={:.2} experience={:.2} location={:.2} -> {:.2}",
                job.title,
                skill_score,
                semantic_score,
                role_score,
                experience_score,
                location_score,
                score
            );

            let summary = build_summary(&matched, skill_score, semantic_score, location_score, job);
            let display_location = if job.location.trim().is_empty() {
                if location.trim().is_empty() {
                    "Remote".to_string()
                } else {
                    location.trim().to_string()
                }
            } else {
                job.location.clone()
            };

            scored.push(ScoredJob {
                title: job.title.clone(),
                company: job.company.clone(),
                location: display_location,
                description: job.description.clone(),
                apply_link: job.apply_link.clone(),
                score,
                summary,
                skills: job_profile,
                keywords: matched.into_iter().take(TOP_KEYWORDS).collect(),
            });
        }

        // Stable sort preserves input order among equal scores.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored
    }

    fn experience_score(&self, description: &str, target: ExperienceTarget) -> f64 {
        if target.accepts_any {
            return 1.0;
        }
        let required: u32 = self
            .required_years_re
            .captures(&description.to_lowercase())
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        if target.years >= required {
            1.0
        } else if required >= 1 && target.years >= required - 1 {
            0.5
        } else {
            0.0
        }
    }
}

/// Job skills that also appear in the resume skill set, lowercased and
/// in sorted order.
fn matched_skills(resume_skills: &BTreeSet<String>, job_profile: &SkillProfile) -> Vec<String> {
    job_profile
        .all_skills()
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| resume_skills.contains(s))
        .collect()
}

fn skill_overlap_score(matched: usize, job_skill_count: usize) -> f64 {
    let denominator = job_skill_count.max(1).min(SKILL_OVERLAP_CAP);
    (matched as f64 / denominator as f64).min(1.0)
}

fn role_score(roles: &[String], job: &JobPosting) -> f64 {
    let title = job.title.to_lowercase();
    let description = job.description.to_lowercase();
    let hit = roles.iter().any(|role| {
        let role = role.to_lowercase();
        title.contains(&role) || description.contains(&role)
    });
    if hit {
        1.0
    } else {
        0.0
    }
}

/// US state full names and their postal abbreviations.
const US_STATES: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

/// Location fit. "Remote" anywhere in the job location always wins; a
/// non-empty user location matching as a substring wins; a user location
/// naming a US state matches its postal abbreviation as a distinct token
/// so "CA" never fires inside an unrelated word.
fn location_score(job_location: &str, user_location_lower: &str) -> f64 {
    let job_lower = job_location.to_lowercase();
    if job_lower.contains("remote") {
        return 1.0;
    }
    if user_location_lower.is_empty() {
        return 0.0;
    }
    if job_lower.contains(user_location_lower) {
        return 1.0;
    }

    if let Some((_, abbrev)) = US_STATES.iter().find(|(name, _)| *name == user_location_lower) {
        let token_hit = job_location
            .split(|c: char| c == ',' || c.is_whitespace())
            .any(|token| token.eq_ignore_ascii_case(abbrev));
        if token_hit {
            return 1.0;
        }
    }
    0.0
}

fn build_summary(
    matched: &[String],
    skill_score: f64,
    semantic_score: f64,
    location_score: f64,
    job: &JobPosting,
) -> String {
    if !matched.is_empty() {
        let names: Vec<String> = matched
            .iter()
            .take(SUMMARY_SKILLS)
            .map(|s| title_case(s))
            .collect();
        return format!(
            "Skills Match ({}%): {}",
            (skill_score * 100.0).round() as i64,
            names.join(", ")
        );
    }
    if semantic_score > 0.4 {
        return format!(
            "Strong Resume Context Match ({}%)",
            (semantic_score * 100.0).round() as i64
        );
    }
    if location_score > 0.9 {
        return format!("Location Match: {}", job.location);
    }
    "Potential match based on role alignment.".to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
