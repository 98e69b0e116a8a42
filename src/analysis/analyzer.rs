// src/analysis/analyzer.rs
//! Top-level analyze operation: pure function of the request plus the catalog

use super::catalog::KeywordCatalog;
use super::extractor::{extract_job_keywords, extract_keywords};
use super::feedback::generate_feedback;
use super::scoring::{ats_compatibility, calculate_score};
use super::sections::analyze_sections;
use super::types::{AnalysisReport, AnalysisType, AnalyzeRequest};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// The report lists at most this many missing keywords
const MISSING_KEYWORDS_CAP: usize = 10;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Missing or empty resume text; surfaced to the caller as a client
    /// error, never retried
    #[error("Resume text is required")]
    EmptyResumeText,
    /// Unexpected failure during scoring; deterministic, so no retry either
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub struct ResumeAnalyzer {
    catalog: Arc<KeywordCatalog>,
}

impl ResumeAnalyzer {
    pub fn new(catalog: Arc<KeywordCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &KeywordCatalog {
        &self.catalog
    }

    /// Score the resume and assemble the full report. No I/O, no shared
    /// mutable state; identical inputs produce identical reports.
    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport, AnalyzeError> {
        if request.resume_text.is_empty() {
            return Err(AnalyzeError::EmptyResumeText);
        }

        let found = extract_keywords(&self.catalog, &request.resume_text);
        let missing = self.missing_keywords(request, &found);

        debug!(
            found = found.len(),
            missing = missing.len(),
            "Keyword extraction complete"
        );

        let score = calculate_score(&request.resume_text, &found, &missing);
        let feedback = generate_feedback(&request.resume_text, &found, &missing);
        let detailed_analysis = analyze_sections(&request.resume_text);

        let mut missing_keywords = missing;
        missing_keywords.truncate(MISSING_KEYWORDS_CAP);

        Ok(AnalysisReport {
            score,
            ats_compatibility: ats_compatibility(score),
            keywords: found,
            missing_keywords,
            feedback,
            detailed_analysis,
        })
    }

    /// Expected-but-absent keywords. Job-specific mode derives expectations
    /// from the job description's requirement lines; general mode (and
    /// job-specific without a description) uses the fixed default pool.
    fn missing_keywords(&self, request: &AnalyzeRequest, found: &[String]) -> Vec<String> {
        let found_lower: HashSet<String> = found.iter().map(|k| k.to_lowercase()).collect();

        match (request.analysis_type, request.job_description.as_deref()) {
            (AnalysisType::JobSpecific, Some(job_description)) if !job_description.is_empty() => {
                extract_job_keywords(&self.catalog, job_description)
                    .into_iter()
                    .filter(|keyword| !found_lower.contains(&keyword.to_lowercase()))
                    .collect()
            }
            (AnalysisType::JobSpecific, _) => {
                warn!("Job-specific analysis requested without a job description, using default pool");
                self.default_pool_missing(&found_lower)
            }
            _ => self.default_pool_missing(&found_lower),
        }
    }

    fn default_pool_missing(&self, found_lower: &HashSet<String>) -> Vec<String> {
        self.catalog
            .default_pool()
            .into_iter()
            .filter(|keyword| !found_lower.contains(&keyword.to_lowercase()))
            .cloned()
            .collect()
    }
}
