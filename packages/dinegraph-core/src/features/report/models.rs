//! Report Models

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

use crate::errors::Result;
use crate::features::ranking::RankResult;

/// Output format for a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}' (expected text or json)", other)),
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    /// Entries to keep (>= 1)
    pub top_k: usize,

    pub format: ReportFormat,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_k: 10,
            format: ReportFormat::Text,
        }
    }
}

/// One ranked line of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based
    pub position: usize,
    pub identifier: String,
    pub score: f64,
}

/// Top-k view of a ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub entries: Vec<ReportEntry>,

    /// Candidates that were ranked (before truncation)
    pub total_candidates: usize,

    pub converged: bool,
    pub iterations: usize,
}

impl RecommendationReport {
    /// Keep the first `top_k` entries of `ranking`
    pub fn from_rank(ranking: &RankResult, top_k: usize) -> Self {
        let entries = ranking
            .top(top_k)
            .iter()
            .enumerate()
            .map(|(i, entry)| ReportEntry {
                position: i + 1,
                identifier: entry.identifier.clone(),
                score: entry.score,
            })
            .collect();

        Self {
            entries,
            total_candidates: ranking.len(),
            converged: ranking.converged,
            iterations: ranking.iterations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fixed-width text table
    pub fn render_text(&self) -> String {
        if self.entries.is_empty() {
            return "No restaurants matched your preferences.\n".to_string();
        }

        let width = self
            .entries
            .iter()
            .map(|e| e.identifier.chars().count())
            .max()
            .unwrap_or(0)
            .max("Restaurant".len());

        let mut out = String::new();
        let _ = writeln!(out, "{:>4}  {:<width$}  {:>10}", "#", "Restaurant", "Score");
        let _ = writeln!(out, "{}", "-".repeat(4 + 2 + width + 2 + 10));
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "{:>4}  {:<width$}  {:>10.6}",
                entry.position, entry.identifier, entry.score
            );
        }

        if !self.converged {
            let _ = writeln!(
                out,
                "\n(ranking stopped after {} iterations without converging)",
                self.iterations
            );
        }

        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.to_json(),
        }
    }
}
