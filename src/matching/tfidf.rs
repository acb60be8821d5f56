//! TF-IDF cosine similarity between a resume and a batch of job descriptions
//!
//! The vectorizer is refit on every call: the vocabulary is corpus-specific
//! (resume plus the current job batch) and nothing is cached between calls.

use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Vocabulary cap, bounding memory and runtime on large job batches.
pub const MAX_FEATURES: usize = 5000;

const MIN_TOKEN_LEN: usize = 2;

/// Cosine similarity between the resume and every job description, aligned
/// index-for-index with the input. Scores are clamped into [0, 1]; an empty
/// job list short-circuits to an empty result without fitting anything.
pub fn similarity_scores(resume_text: &str, job_descriptions: &[String]) -> Vec<f64> {
    if job_descriptions.is_empty() {
        return Vec::new();
    }

    let mut documents: Vec<Vec<String>> = Vec::with_capacity(job_descriptions.len() + 1);
    documents.push(tokenize(resume_text));
    for description in job_descriptions {
        documents.push(tokenize(description));
    }

    let vocabulary = build_vocabulary(&documents);
    let idf = inverse_document_frequencies(&documents, &vocabulary);
    let vectors: Vec<HashMap<usize, f64>> = documents
        .iter()
        .map(|tokens| tfidf_vector(tokens, &vocabulary, &idf))
        .collect();

    let resume_vector = &vectors[0];
    vectors[1..]
        .iter()
        .map(|job_vector| cosine(resume_vector, job_vector).clamp(0.0, 1.0))
        .collect()
}

/// Lowercased word tokens of at least [`MIN_TOKEN_LEN`] characters.
fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}

/// Select up to [`MAX_FEATURES`] terms by total corpus count, ties broken
/// alphabetically for determinism, and assign each an index.
fn build_vocabulary(documents: &[Vec<String>]) -> HashMap<String, usize> {
    let mut corpus_counts: HashMap<&str, usize> = HashMap::new();
    for tokens in documents {
        for token in tokens {
            *corpus_counts.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let mut terms: Vec<(&str, usize)> = corpus_counts.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    terms.truncate(MAX_FEATURES);

    terms
        .into_iter()
        .enumerate()
        .map(|(idx, (term, _))| (term.to_string(), idx))
        .collect()
}

/// Smoothed IDF per vocabulary term: `ln((1 + n) / (1 + df)) + 1`.
fn inverse_document_frequencies(
    documents: &[Vec<String>],
    vocabulary: &HashMap<String, usize>,
) -> Vec<f64> {
    let mut document_frequency = vec![0usize; vocabulary.len()];
    for tokens in documents {
        let mut seen = vec![false; vocabulary.len()];
        for token in tokens {
            if let Some(&idx) = vocabulary.get(token) {
                if !seen[idx] {
                    seen[idx] = true;
                    document_frequency[idx] += 1;
                }
            }
        }
    }

    let n = documents.len() as f64;
    document_frequency
        .into_iter()
        .map(|df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect()
}

/// Sparse, L2-normalized TF-IDF vector for one document.
fn tfidf_vector(
    tokens: &[String],
    vocabulary: &HashMap<String, usize>,
    idf: &[f64],
) -> HashMap<usize, f64> {
    let mut vector: HashMap<usize, f64> = HashMap::new();
    for token in tokens {
        if let Some(&idx) = vocabulary.get(token) {
            *vector.entry(idx).or_insert(0.0) += 1.0;
        }
    }
    for (idx, weight) in vector.iter_mut() {
        *weight *= idf[*idx];
    }

    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }
    vector
}

/// Dot product of two L2-normalized sparse vectors.
fn cosine(a: &HashMap<usize, f64>, b: &HashMap<usize, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(idx, wa)| large.get(idx).map(|wb| wa * wb))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_job_list() {
        assert!(similarity_scores("some resume text", &[]).is_empty());
    }

    #[test]
    fn test_alignment_and_bounds() {
        let jobs = vec![
            "python developer with aws experience".to_string(),
            "restaurant manager with customer service focus".to_string(),
            String::new(),
        ];
        let scores = similarity_scores("python engineer using aws daily", &jobs);
        assert_eq!(scores.len(), 3);
        for score in &scores {
            assert!((0.0..=1.0).contains(score));
        }
    }

    #[test]
    fn test_related_text_scores_higher() {
        let jobs = vec![
            "looking for python developers with aws experience".to_string(),
            "provide phone support and scheduling".to_string(),
        ];
        let scores = similarity_scores("experienced python engineer working with aws", &jobs);
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn test_identical_text_near_one() {
        let text = "senior rust engineer building distributed systems";
        let scores = similarity_scores(text, &[text.to_string()]);
        assert!(scores[0] > 0.99);
    }

    #[test]
    fn test_empty_description_scores_zero() {
        let scores = similarity_scores("python engineer", &[String::new()]);
        assert_eq!(scores, vec![0.0]);
    }

    #[test]
    fn test_deterministic() {
        let jobs = vec![
            "python and sql and airflow".to_string(),
            "java spring microservices".to_string(),
        ];
        let first = similarity_scores("python data engineer", &jobs);
        let second = similarity_scores("python data engineer", &jobs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tokenize_filters_short_tokens() {
        let tokens = tokenize("R a Go to C++");
        assert!(tokens.contains(&"go".to_string()));
        assert!(!tokens.contains(&"r".to_string()));
        assert!(!tokens.contains(&"a".to_string()));
    }
}
