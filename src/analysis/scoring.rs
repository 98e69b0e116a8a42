// src/analysis/scoring.rs
//! Composite resume score: additive/subtractive formula clamped to [0, 100]

use crate::utils;

/// Resume section markers that earn a structure bonus when present
pub const SECTION_MARKERS: [&str; 4] = ["summary", "experience", "skills", "education"];

/// Overall score from keyword hits, missing expectations and structural
/// signals. The formula is fixed:
///
/// - base 50
/// - +2 per found keyword, capped at +30
/// - -1 per missing keyword, capped at -20
/// - +5 per section marker present as a case-insensitive substring
/// - +10 when more than 5 separate digit runs appear (quantified results)
///
/// Clamped to [0, 100] once at the end, not at intermediate steps.
pub fn calculate_score(resume_text: &str, found: &[String], missing: &[String]) -> u8 {
    let mut score: i64 = 50;

    score += (found.len() as i64 * 2).min(30);
    score -= (missing.len() as i64).min(20);

    let lowered = resume_text.to_lowercase();
    for marker in SECTION_MARKERS {
        if lowered.contains(marker) {
            score += 5;
        }
    }

    if utils::numeric_token_count(resume_text) > 5 {
        score += 10;
    }

    score.clamp(0, 100) as u8
}

/// ATS systems tend to rate slightly above the raw score
pub fn ats_compatibility(score: u8) -> u8 {
    (u16::from(score) + 10).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("kw{}", i)).collect()
    }

    #[test]
    fn test_base_score() {
        assert_eq!(calculate_score("plain text", &[], &[]), 50);
    }

    #[test]
    fn test_found_keyword_bonus_caps_at_30() {
        assert_eq!(calculate_score("plain text", &keywords(5), &[]), 60);
        assert_eq!(calculate_score("plain text", &keywords(15), &[]), 80);
        assert_eq!(calculate_score("plain text", &keywords(40), &[]), 80);
    }

    #[test]
    fn test_missing_keyword_penalty_caps_at_20() {
        assert_eq!(calculate_score("plain text", &[], &keywords(8)), 42);
        assert_eq!(calculate_score("plain text", &[], &keywords(30)), 30);
    }

    #[test]
    fn test_section_bonuses_are_independent() {
        assert_eq!(calculate_score("Summary of my Experience", &[], &[]), 60);
        assert_eq!(
            calculate_score("summary experience skills education", &[], &[]),
            70
        );
    }

    #[test]
    fn test_digit_run_bonus_requires_more_than_five() {
        assert_eq!(calculate_score("1 2 3 4 5", &[], &[]), 50);
        assert_eq!(calculate_score("1 2 3 4 5 6", &[], &[]), 60);
    }

    #[test]
    fn test_score_clamped_to_bounds() {
        // 50 + 30 + 20 + 10 = 110 before the clamp
        let text = "summary experience skills education 1 2 3 4 5 6";
        assert_eq!(calculate_score(text, &keywords(20), &[]), 100);
        assert_eq!(calculate_score("plain text", &[], &keywords(20)), 30);
    }

    #[test]
    fn test_ats_compatibility_derivation() {
        assert_eq!(ats_compatibility(50), 60);
        assert_eq!(ats_compatibility(91), 100);
        assert_eq!(ats_compatibility(100), 100);
        assert_eq!(ats_compatibility(0), 10);
    }
}
