use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity bucket of a detected security pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Fixed penalty magnitude contributed to the chain risk score.
    pub fn penalty(&self) -> i64 {
        match self {
            Severity::High => 20,
            Severity::Medium => 10,
            Severity::Low => 5,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
        }
    }
}

/// A security pattern flagged in the contract source or bytecode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityFinding {
    pub pattern: String,
    pub severity: Severity,
    pub description: Option<String>,
}

/// On-chain contract and holder record fetched by the explorer collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainData {
    pub verified: bool,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub is_proxy: bool,
    /// Days since deployment; None when the deployment block is unknown.
    pub age_days: Option<i64>,
    /// Supply percentages of the largest holders, descending.
    pub holder_percentages: Vec<f64>,
    pub findings: Vec<SecurityFinding>,
}

impl ChainData {
    pub fn top_holder_percentage(&self) -> Option<f64> {
        self.holder_percentages.first().copied()
    }

    pub fn top10_percentage(&self) -> f64 {
        self.holder_percentages.iter().take(10).sum()
    }
}
