use serde::{Deserialize, Serialize};
use std::fmt;

/// The four independent risk domains combined by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Chain,
    Sentiment,
    Market,
    Dex,
}

impl RiskCategory {
    /// Canonical category order used for factor compilation and breakdowns.
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Chain,
        RiskCategory::Sentiment,
        RiskCategory::Market,
        RiskCategory::Dex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Chain => "chain",
            RiskCategory::Sentiment => "sentiment",
            RiskCategory::Market => "market",
            RiskCategory::Dex => "dex",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucketing convention applied to every score in the system:
    /// `< 40` is Low, `40..=70` is Medium, `> 70` is High.
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            RiskLevel::High
        } else if score >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Normalized output of a single domain scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSignal {
    pub category: RiskCategory,
    pub score: u8,
    pub level: RiskLevel,
    /// Evidence strings in detection order; never re-sorted.
    pub negative_factors: Vec<String>,
    pub positive_factors: Vec<String>,
}

impl RiskSignal {
    /// Builds a signal from an unbounded accumulated score, clamping to
    /// [0, 100] here and only here.
    pub fn from_raw(
        category: RiskCategory,
        raw_score: i64,
        negative_factors: Vec<String>,
        positive_factors: Vec<String>,
    ) -> Self {
        let score = raw_score.clamp(0, 100) as u8;
        Self {
            category,
            score,
            level: RiskLevel::from_score(score),
            negative_factors,
            positive_factors,
        }
    }
}
