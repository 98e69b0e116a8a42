// src/analysis/extractor.rs
//! Substring-based keyword detection over the static catalog

use super::catalog::KeywordCatalog;
use std::collections::HashSet;

/// Line markers that identify requirement sections in a job description
const JOB_SECTION_MARKERS: [&str; 4] = ["requirement", "qualifications", "skills", "experience"];

/// Catalog keywords found in the text, in catalog definition order.
///
/// Matching is case-insensitive substring containment with no word-boundary
/// enforcement, so "java" also matches inside "javascript". That imprecision
/// is part of the established scoring behavior and is kept as-is.
pub fn extract_keywords(catalog: &KeywordCatalog, text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();

    catalog
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .cloned()
        .collect()
}

/// Catalog keywords mentioned in the requirement-like lines of a job
/// description, deduplicated in first-hit order.
///
/// Only lines containing one of the requirement markers are scanned. Returns
/// an empty list when no line matches a marker; falling back to the general
/// expectation pool in that case is the analyzer's responsibility.
pub fn extract_job_keywords(catalog: &KeywordCatalog, job_description: &str) -> Vec<String> {
    let lowered = job_description.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut keywords = Vec::new();

    for line in lowered
        .split('\n')
        .filter(|line| JOB_SECTION_MARKERS.iter().any(|marker| line.contains(marker)))
    {
        for keyword in catalog.iter() {
            if line.contains(&keyword.to_lowercase()) && seen.insert(keyword.as_str()) {
                keywords.push(keyword.clone());
            }
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_case_insensitive() {
        let catalog = KeywordCatalog::builtin();
        let found = extract_keywords(&catalog, "Experienced in PYTHON and docker.");
        assert_eq!(found, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_extract_keywords_preserves_catalog_order() {
        let catalog = KeywordCatalog::builtin();
        let found = extract_keywords(&catalog, "Leadership first, then React and SQL");
        // Catalog order (technical before soft), not mention order
        assert_eq!(found, vec!["React", "SQL", "Leadership"]);
    }

    #[test]
    fn test_substring_match_has_known_false_positives() {
        let catalog = KeywordCatalog::builtin();
        // Known limitation: no word boundaries, so "JavaScript" also
        // satisfies the "Java" lookup
        let found = extract_keywords(&catalog, "JavaScript developer");
        assert!(found.contains(&"JavaScript".to_string()));
        assert!(found.contains(&"Java".to_string()));
    }

    #[test]
    fn test_extract_job_keywords_requirement_lines_only() {
        let catalog = KeywordCatalog::builtin();
        let jd = "About Acme Corp: we use Python in production.\n\
                  Requirements: Docker, Kubernetes, Agile\n\
                  Perks: free coffee";
        let found = extract_job_keywords(&catalog, jd);
        // Python appears outside any requirement-like line
        assert_eq!(found, vec!["Docker", "Kubernetes", "Agile"]);
    }

    #[test]
    fn test_extract_job_keywords_deduplicates() {
        let catalog = KeywordCatalog::builtin();
        let jd = "Requirements: Docker experience\nSkills: Docker, Git";
        let found = extract_job_keywords(&catalog, jd);
        assert_eq!(
            found.iter().filter(|k| k.as_str() == "Docker").count(),
            1
        );
        assert!(found.contains(&"Git".to_string()));
    }

    #[test]
    fn test_extract_job_keywords_empty_without_markers() {
        let catalog = KeywordCatalog::builtin();
        let jd = "We are hiring a Python and Docker enthusiast";
        assert!(extract_job_keywords(&catalog, jd).is_empty());
    }
}
