// src/analysis/mod.rs
//! Keyword-based resume scoring: extraction, composite score, feedback and
//! the fixed sectional breakdown

pub mod analyzer;
pub mod catalog;
pub mod extractor;
pub mod feedback;
pub mod scoring;
pub mod sections;
pub mod types;

pub use analyzer::{AnalyzeError, ResumeAnalyzer};
pub use catalog::KeywordCatalog;
pub use types::{
    AnalysisReport, AnalysisType, AnalyzeRequest, DetailedAnalysis, FeedbackItem, FeedbackKind,
    Priority, SectionReport,
};
