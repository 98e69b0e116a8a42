// src/analysis/feedback.rs
//! Rule-based feedback generation with static message templates

use super::types::{FeedbackItem, FeedbackKind, Priority};
use crate::utils;

/// Categorized feedback built from the fixed rule set. Rules append in a
/// stable order; only the keyword-volume tier is mutually exclusive.
pub fn generate_feedback(
    resume_text: &str,
    found: &[String],
    missing: &[String],
) -> Vec<FeedbackItem> {
    let mut feedback = Vec::new();

    // Keyword volume tier: exactly one of success/info/warning fires
    if found.len() > 10 {
        feedback.push(FeedbackItem {
            kind: FeedbackKind::Success,
            message: format!(
                "Excellent keyword optimization with {} relevant keywords found",
                found.len()
            ),
            category: "Keywords".to_string(),
            correction: None,
            priority: Priority::Low,
        });
    } else if found.len() > 5 {
        feedback.push(FeedbackItem {
            kind: FeedbackKind::Info,
            message: format!("Good keyword presence with {} relevant keywords", found.len()),
            category: "Keywords".to_string(),
            correction: None,
            priority: Priority::Medium,
        });
    } else {
        feedback.push(FeedbackItem {
            kind: FeedbackKind::Warning,
            message: "Limited relevant keywords found - consider adding more industry-specific terms"
                .to_string(),
            category: "Keywords".to_string(),
            correction: Some(
                "Add relevant technical skills, soft skills, and industry terms mentioned in job postings"
                    .to_string(),
            ),
            priority: Priority::High,
        });
    }

    // Missing expectations: the correction lists at most the first 5
    if !missing.is_empty() {
        let preview = missing[..missing.len().min(5)].join(", ");
        feedback.push(FeedbackItem {
            kind: FeedbackKind::Error,
            message: format!(
                "Missing {} important keywords that could improve ATS compatibility",
                missing.len()
            ),
            category: "ATS Optimization".to_string(),
            correction: Some(format!("Consider adding these keywords: {}", preview)),
            priority: Priority::High,
        });
    }

    if !resume_text.to_lowercase().contains("summary") {
        feedback.push(FeedbackItem {
            kind: FeedbackKind::Warning,
            message: "No professional summary detected".to_string(),
            category: "Structure".to_string(),
            correction: Some(
                "Add a 3-4 line professional summary highlighting your key qualifications"
                    .to_string(),
            ),
            priority: Priority::Medium,
        });
    }

    // Length tier on the naive word count; 200..=800 words emits nothing
    let word_count = utils::word_count(resume_text);
    if word_count < 200 {
        feedback.push(FeedbackItem {
            kind: FeedbackKind::Warning,
            message: "Resume appears too short - may lack sufficient detail".to_string(),
            category: "Content".to_string(),
            correction: Some(
                "Expand on your experience with specific achievements and responsibilities"
                    .to_string(),
            ),
            priority: Priority::Medium,
        });
    } else if word_count > 800 {
        feedback.push(FeedbackItem {
            kind: FeedbackKind::Info,
            message: "Resume is quite detailed - ensure it stays focused and relevant".to_string(),
            category: "Content".to_string(),
            correction: None,
            priority: Priority::Low,
        });
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("kw{}", i)).collect()
    }

    fn text_of(words: usize) -> String {
        vec!["word"; words].join(" ")
    }

    fn by_category<'a>(items: &'a [FeedbackItem], category: &str) -> Vec<&'a FeedbackItem> {
        items.iter().filter(|i| i.category == category).collect()
    }

    #[test]
    fn test_keyword_tier_success() {
        let feedback = generate_feedback(&text_of(300), &keywords(11), &[]);
        let keyword_items = by_category(&feedback, "Keywords");
        assert_eq!(keyword_items.len(), 1);
        assert_eq!(keyword_items[0].kind, FeedbackKind::Success);
        assert_eq!(keyword_items[0].priority, Priority::Low);
        assert!(keyword_items[0].message.contains("11"));
    }

    #[test]
    fn test_keyword_tier_info() {
        let feedback = generate_feedback(&text_of(300), &keywords(6), &[]);
        let keyword_items = by_category(&feedback, "Keywords");
        assert_eq!(keyword_items.len(), 1);
        assert_eq!(keyword_items[0].kind, FeedbackKind::Info);
    }

    #[test]
    fn test_keyword_tier_warning_with_correction() {
        let feedback = generate_feedback(&text_of(300), &keywords(2), &[]);
        let keyword_items = by_category(&feedback, "Keywords");
        assert_eq!(keyword_items.len(), 1);
        assert_eq!(keyword_items[0].kind, FeedbackKind::Warning);
        assert_eq!(keyword_items[0].priority, Priority::High);
        assert!(keyword_items[0].correction.is_some());
    }

    #[test]
    fn test_missing_keywords_lists_first_five() {
        let missing: Vec<String> = ["A", "B", "C", "D", "E", "F", "G"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let feedback = generate_feedback(&text_of(300), &keywords(6), &missing);
        let items = by_category(&feedback, "ATS Optimization");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, FeedbackKind::Error);
        assert!(items[0].message.contains("Missing 7 important keywords"));
        assert_eq!(
            items[0].correction.as_deref(),
            Some("Consider adding these keywords: A, B, C, D, E")
        );
    }

    #[test]
    fn test_summary_warning_only_when_absent() {
        let with_summary = format!("Professional Summary {}", text_of(300));
        let feedback = generate_feedback(&with_summary, &keywords(6), &[]);
        assert!(by_category(&feedback, "Structure").is_empty());

        let feedback = generate_feedback(&text_of(300), &keywords(6), &[]);
        assert_eq!(by_category(&feedback, "Structure").len(), 1);
    }

    #[test]
    fn test_word_count_tiers() {
        let feedback = generate_feedback(&text_of(50), &keywords(6), &[]);
        let items = by_category(&feedback, "Content");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, FeedbackKind::Warning);

        let feedback = generate_feedback(&text_of(900), &keywords(6), &[]);
        let items = by_category(&feedback, "Content");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, FeedbackKind::Info);

        let feedback = generate_feedback(&text_of(400), &keywords(6), &[]);
        assert!(by_category(&feedback, "Content").is_empty());
    }
}
