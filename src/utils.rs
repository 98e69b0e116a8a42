// src/utils.rs
use chrono::Utc;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Word count via naive single-space split. Kept deliberately naive for
/// behavioral compatibility: consecutive spaces and newline-joined words are
/// counted the same way the original service counted them.
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Number of separate digit runs in the text, used as a proxy for
/// quantified achievements
pub fn numeric_token_count(text: &str) -> usize {
    static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();
    let re = DIGIT_RUN.get_or_init(|| Regex::new(r"\d+").expect("invalid digit-run pattern"));
    re.find_iter(text).count()
}

/// Build a timestamped report file path for offline analysis output
pub fn report_file_path(base: &Path, resume_stem: &str) -> PathBuf {
    base.join(format!(
        "{}_analysis_{}.json",
        resume_stem,
        Utc::now().format("%Y%m%d_%H%M%S")
    ))
}
