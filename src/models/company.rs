use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A company mention reduced to lowercase ASCII letters and digits.
///
/// Normalization is aggressive: "Acme Corp" and
/// "acme-corp" both become `acmecorp`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyName(String);

impl CompanyName {
    /// Returns `None` when nothing survives normalization.
    pub fn normalize(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of one run over a repository's contributors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyReport {
    pub owner: String,
    pub repo: String,
    /// Distinct non-bot actors seen in the activity feed.
    pub actors: usize,
    pub profiles_resolved: usize,
    pub profiles_failed: usize,
    /// Sorted and deduplicated.
    pub companies: Vec<CompanyName>,
    pub generated_at: DateTime<Utc>,
}

impl CompanyReport {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub fn company_names(&self) -> Vec<&str> {
        self.companies.iter().map(CompanyName::as_str).collect()
    }
}
