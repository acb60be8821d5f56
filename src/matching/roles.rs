//! Target role inference from resume content and explicit user input

use crate::matching::sections::ResumeSections;

/// Maximum number of role labels returned per inference.
pub const MAX_ROLES: usize = 3;

/// Fallback label when nothing can be inferred.
pub const GENERAL_ROLE: &str = "General";

/// Predefined roles and the keyword phrases that signal them. Iteration
/// order is significant: it breaks ties during scoring.
pub const ROLE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Data Scientist",
        &[
            "data scientist", "data science", "machine learning", "statistical modeling",
            "data analysis", "predictive modeling", "data mining", "statistics",
            "quantitative analysis", "statistical analysis", "data analytics",
        ],
    ),
    (
        "Machine Learning Engineer",
        &[
            "machine learning engineer", "ml engineer", "deep learning", "neural networks",
            "model deployment", "mlops", "ai engineer", "model training", "ml systems",
            "deep learning engineer",
        ],
    ),
    (
        "Data Engineer",
        &[
            "data engineer", "data engineering", "data pipeline", "etl", "data warehouse",
            "big data", "spark", "hadoop", "data infrastructure", "data architecture",
            "pipeline development",
        ],
    ),
    (
        "Data Analyst",
        &[
            "data analyst", "business analyst", "analytics", "reporting", "dashboard",
            "sql analyst", "data visualization", "business intelligence", "analyst",
            "bi analyst",
        ],
    ),
    (
        "Software Engineer",
        &[
            "software engineer", "software developer", "full stack", "backend developer",
            "frontend developer", "web developer", "application developer",
            "software development", "full-stack developer", "backend engineer",
        ],
    ),
    (
        "DevOps Engineer",
        &[
            "devops", "devops engineer", "site reliability", "cloud engineer",
            "infrastructure", "ci/cd", "kubernetes", "sre", "platform engineer",
            "infrastructure engineer",
        ],
    ),
    (
        "Research Scientist",
        &[
            "research scientist", "researcher", "phd", "publications", "academic research",
            "scientific research", "research engineer", "scientist",
        ],
    ),
    (
        "AI Engineer",
        &[
            "ai engineer", "artificial intelligence", "ai/ml", "ai systems", "ai developer",
            "ai researcher", "artificial intelligence engineer",
        ],
    ),
];

/// Infer up to [`MAX_ROLES`] target job roles.
///
/// An explicit user title has priority: predefined roles matching it by
/// bidirectional substring containment come first, and an unmatched title
/// is passed through verbatim as a custom role. Keyword scoring then runs
/// over the summary section, falling back to skills+experience, and
/// finally the `other` bucket. Never returns an empty list.
pub fn infer_roles(sections: &ResumeSections, user_title: Option<&str>) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();

    if let Some(title) = user_title {
        let title = title.trim();
        if !title.is_empty() {
            let title_lower = title.to_lowercase();
            for (role, _) in ROLE_KEYWORDS {
                let role_lower = role.to_lowercase();
                if title_lower.contains(&role_lower) || role_lower.contains(&title_lower) {
                    if !roles.iter().any(|r| r == role) {
                        roles.push((*role).to_string());
                    }
                }
            }
            if roles.is_empty() {
                log::debug!("using custom role from user input: {title}");
                roles.push(title.to_string());
            }
        }
    }

    let mut scored = score_roles(&sections.summary.to_lowercase());
    if scored.is_empty() {
        let combined = format!(
            "{} {}",
            sections.skills.to_lowercase(),
            sections.experience.to_lowercase()
        );
        scored = score_roles(&combined);
    }
    if scored.is_empty() {
        scored = score_roles(&sections.other.to_lowercase());
    }

    // Stable sort keeps the declaration order for equal scores.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    for (role, _) in scored.into_iter().take(MAX_ROLES) {
        if !roles.iter().any(|r| r == role) {
            roles.push(role.to_string());
        }
    }

    roles.truncate(MAX_ROLES);
    if roles.is_empty() {
        log::debug!("no role could be inferred, defaulting to {GENERAL_ROLE}");
        roles.push(GENERAL_ROLE.to_string());
    }

    log::debug!("inferred target roles: {roles:?}");
    roles
}

/// Score each predefined role by how many of its keyword phrases occur in
/// the (lowercased) text; roles with zero hits are omitted.
fn score_roles(text_lower: &str) -> Vec<(&'static str, usize)> {
    if text_lower.trim().is_empty() {
        return Vec::new();
    }
    ROLE_KEYWORDS
        .iter()
        .filter_map(|(role, keywords)| {
            let score = keywords.iter().filter(|k| text_lower.contains(*k)).count();
            (score > 0).then_some((*role, score))
        })
        .collect()
}
