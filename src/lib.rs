//! Keyword-based resume scoring against a static ATS catalog, with a JSON
//! API and an offline CLI.

pub mod analysis;
pub mod config;
pub mod utils;
pub mod web;

pub use analysis::{
    AnalysisReport, AnalysisType, AnalyzeError, AnalyzeRequest, KeywordCatalog, ResumeAnalyzer,
};
pub use config::AppConfig;
pub use web::start_web_server;

use std::sync::Arc;

/// Convenience function for one-off analysis with the built-in catalog
pub fn analyze_resume(
    resume_text: &str,
    job_description: Option<&str>,
    analysis_type: AnalysisType,
) -> Result<AnalysisReport, AnalyzeError> {
    let analyzer = ResumeAnalyzer::new(Arc::new(KeywordCatalog::builtin()));
    analyzer.analyze(&AnalyzeRequest {
        resume_text: resume_text.to_string(),
        job_description: job_description.map(|s| s.to_string()),
        analysis_type,
    })
}
