use crate::models::signal::{RiskCategory, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final output of one evaluation request.
///
/// `breakdown` contains only the categories whose signal was actually
/// present; a category whose fetch failed is omitted entirely, never
/// coerced to 0. Created fresh per request and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveAssessment {
    pub project_identifier: String,
    pub timestamp: DateTime<Utc>,
    pub overall_score: u8,
    pub overall_level: RiskLevel,
    pub breakdown: BTreeMap<RiskCategory, u8>,
    /// Category-prefixed evidence strings, e.g. `"[chain] ..."`, compiled in
    /// the fixed order chain, sentiment, market, dex.
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
}
