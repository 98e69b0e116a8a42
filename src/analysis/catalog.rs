// src/analysis/catalog.rs
//! Static ATS keyword catalog - three disjoint categories, loaded once at startup

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Recognized ATS keywords grouped by category. Immutable after load;
/// shared across requests behind an `Arc`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordCatalog {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub industry: Vec<String>,
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordCatalog {
    /// Built-in catalog used when no override file is configured
    pub fn builtin() -> Self {
        let technical = [
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Python",
            "Java",
            "C++",
            "SQL",
            "MongoDB",
            "PostgreSQL",
            "Docker",
            "Kubernetes",
            "AWS",
            "Azure",
            "Git",
            "API",
            "REST",
            "GraphQL",
            "Machine Learning",
            "Data Analysis",
            "Agile",
            "Scrum",
        ];
        let soft = [
            "Leadership",
            "Communication",
            "Team Management",
            "Problem Solving",
            "Project Management",
            "Collaboration",
            "Analytical Thinking",
            "Adaptability",
            "Time Management",
            "Strategic Planning",
            "Mentoring",
            "Decision Making",
        ];
        let industry = [
            "Software Development",
            "Data Science",
            "DevOps",
            "Product Management",
            "Digital Marketing",
            "Business Analysis",
            "Quality Assurance",
            "UI/UX Design",
            "System Administration",
            "Cybersecurity",
            "Cloud Computing",
            "Mobile Development",
        ];

        Self {
            technical: technical.iter().map(|s| s.to_string()).collect(),
            soft: soft.iter().map(|s| s.to_string()).collect(),
            industry: industry.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load a catalog override from a TOML file with `technical`, `soft` and
    /// `industry` string arrays
    pub async fn from_toml_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read keyword catalog: {}", path.display()))?;

        let catalog: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse keyword catalog: {}", path.display()))?;

        catalog.validate()?;
        info!(
            "Loaded keyword catalog from {} ({} entries)",
            path.display(),
            catalog.len()
        );

        Ok(catalog)
    }

    /// Catalog invariants: no empty category, no duplicate within a category,
    /// no keyword present in more than one category
    pub fn validate(&self) -> Result<()> {
        for (name, set) in [
            ("technical", &self.technical),
            ("soft", &self.soft),
            ("industry", &self.industry),
        ] {
            if set.is_empty() {
                anyhow::bail!("Keyword category '{}' must not be empty", name);
            }
        }

        let mut seen: HashSet<String> = HashSet::new();
        for keyword in self.iter() {
            if !seen.insert(keyword.to_lowercase()) {
                anyhow::bail!("Duplicate keyword in catalog: '{}'", keyword);
            }
        }

        Ok(())
    }

    /// All keywords in definition order: technical, then soft, then industry
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .chain(self.industry.iter())
    }

    pub fn len(&self) -> usize {
        self.technical.len() + self.soft.len() + self.industry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expectation pool for general-mode analysis: the first 10 technical and
    /// first 5 soft keywords
    pub fn default_pool(&self) -> Vec<&String> {
        self.technical
            .iter()
            .take(10)
            .chain(self.soft.iter().take(5))
            .collect()
    }
}
