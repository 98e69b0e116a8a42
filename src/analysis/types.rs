// src/analysis/types.rs
use serde::{Deserialize, Serialize};

/// Analysis mode requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisType {
    General,
    JobSpecific,
}

impl Default for AnalysisType {
    fn default() -> Self {
        Self::General
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Raw resume text. An absent field deserializes to "" and is rejected
    /// by the analyzer with the same validation error as an empty string.
    #[serde(default)]
    pub resume_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default)]
    pub analysis_type: AnalysisType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One categorized, prioritized feedback entry, built per request from the
/// fixed rule set and never persisted here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub message: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionReport {
    pub name: String,
    pub score: u8,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingReport {
    pub score: u8,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentReport {
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub sections: Vec<SectionReport>,
    pub formatting: FormattingReport,
    pub content: ContentReport,
}

/// Full analysis result, serialized camelCase to match the public JSON
/// contract
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub score: u8,
    pub ats_compatibility: u8,
    pub keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub feedback: Vec<FeedbackItem>,
    pub detailed_analysis: DetailedAnalysis,
}
