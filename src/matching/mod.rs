//! Core matching pipeline: section parsing, skill extraction, role
//! inference, TF-IDF similarity and the weighted scoring engine.

pub mod engine;
pub mod extractor;
pub mod roles;
pub mod sections;
pub mod skills;
pub mod tfidf;

pub use engine::{JobPosting, MatchEngine, ScoredJob};
pub use extractor::{SkillExtractor, SkillProfile};
pub use sections::{parse_sections, ResumeSections};
pub use skills::SkillCatalog;
