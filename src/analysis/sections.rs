// src/analysis/sections.rs
//! Fixed-shape sectional breakdown keyed on section-name substrings.
//!
//! This runs independently of the keyword score and the two are not
//! reconciled; both outputs are part of the established contract.

use super::types::{ContentReport, DetailedAnalysis, FormattingReport, SectionReport};

pub fn analyze_sections(resume_text: &str) -> DetailedAnalysis {
    let lowered = resume_text.to_lowercase();

    let has_summary = lowered.contains("summary");
    let has_experience = lowered.contains("experience");
    let has_skills = lowered.contains("skills");
    let has_education = lowered.contains("education") || lowered.contains("degree");

    let sections = vec![
        SectionReport {
            name: "Professional Summary".to_string(),
            score: if has_summary { 85 } else { 60 },
            feedback: if has_summary {
                "Good professional summary section found".to_string()
            } else {
                "Consider adding a professional summary section".to_string()
            },
            suggestions: vec![
                "Include quantifiable achievements".to_string(),
                "Highlight relevant skills and experience".to_string(),
                "Keep it concise (3-4 lines)".to_string(),
            ],
        },
        SectionReport {
            name: "Work Experience".to_string(),
            score: if has_experience { 90 } else { 70 },
            feedback: "Work experience section detected".to_string(),
            suggestions: vec![
                "Use action verbs to start bullet points".to_string(),
                "Include specific metrics and results".to_string(),
                "Focus on achievements, not just responsibilities".to_string(),
            ],
        },
        SectionReport {
            name: "Skills".to_string(),
            score: if has_skills { 80 } else { 50 },
            feedback: if has_skills {
                "Skills section found".to_string()
            } else {
                "Skills section missing or unclear".to_string()
            },
            suggestions: vec![
                "Organize skills by category (Technical, Soft Skills)".to_string(),
                "Include proficiency levels".to_string(),
                "Match skills to job requirements".to_string(),
            ],
        },
        SectionReport {
            name: "Education".to_string(),
            score: if has_education { 85 } else { 60 },
            feedback: "Education information present".to_string(),
            suggestions: vec![
                "Include relevant coursework if recent graduate".to_string(),
                "Add certifications and professional development".to_string(),
                "Include GPA if 3.5 or higher".to_string(),
            ],
        },
    ];

    let formatting = FormattingReport {
        score: 75,
        issues: vec![
            "Ensure consistent formatting throughout".to_string(),
            "Use standard fonts (Arial, Calibri, Times New Roman)".to_string(),
            "Maintain proper spacing and margins".to_string(),
        ],
        recommendations: vec![
            "Use bullet points for easy scanning".to_string(),
            "Keep consistent date formats".to_string(),
            "Ensure contact information is prominently placed".to_string(),
        ],
    };

    let content = ContentReport {
        score: 82,
        strengths: vec![
            "Clear structure and organization".to_string(),
            "Relevant work experience".to_string(),
            "Professional presentation".to_string(),
        ],
        improvements: vec![
            "Add more quantifiable achievements".to_string(),
            "Include relevant keywords for ATS".to_string(),
            "Optimize for specific job requirements".to_string(),
        ],
    };

    DetailedAnalysis {
        sections,
        formatting,
        content,
    }
}
