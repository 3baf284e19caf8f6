use serde::{Deserialize, Serialize};

/// The four Lighthouse categories this tool reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditCategory {
    Performance,
    Accessibility,
    BestPractices,
    Seo,
}

impl AuditCategory {
    pub const ALL: [AuditCategory; 4] = [
        AuditCategory::Performance,
        AuditCategory::Accessibility,
        AuditCategory::BestPractices,
        AuditCategory::Seo,
    ];

    /// Key used in the result file's `categories` map.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Accessibility => "accessibility",
            Self::BestPractices => "best-practices",
            Self::Seo => "seo",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Performance => "Performance",
            Self::Accessibility => "Accessibility",
            Self::BestPractices => "Best Practices",
            Self::Seo => "SEO",
        }
    }
}

impl std::fmt::Display for AuditCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsAttention,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditScore {
    pub category: AuditCategory,
    /// 0-100
    pub score: f64,
    pub rating: Rating,
}

/// Scores parsed from one audit run, in `AuditCategory::ALL` order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuditScoreSet {
    pub scores: Vec<AuditScore>,
}

impl AuditScoreSet {
    pub fn get(&self, category: AuditCategory) -> Option<&AuditScore> {
        self.scores.iter().find(|s| s.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }
}
