use crate::models::{ChainData, RiskCategory, RiskSignal};

/// Scores on-chain contract and holder risk.
///
/// Additive-from-zero model: every identified risk adds its fixed penalty
/// to a running total that starts at 0. Contrast with the market scorer,
/// which deviates from a neutral prior of 50.
pub struct ChainRiskScorer;

impl ChainRiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_risk(&self, data: &ChainData) -> RiskSignal {
        let mut score: i64 = 0;
        let mut negative = Vec::new();
        let mut positive = Vec::new();

        if data.verified {
            positive.push("Contract source code is verified".to_string());
        } else {
            score += 50;
            negative.push("Contract source code is not verified".to_string());
        }

        if data.is_proxy {
            score += 20;
            negative.push("Contract uses an upgradeable proxy pattern".to_string());
        }

        if data.name.is_none() || data.symbol.is_none() {
            score += 10;
            negative.push("Token name or symbol metadata is missing".to_string());
        }

        match data.age_days {
            None => {
                score += 20;
                negative.push("Contract deployment age is unknown".to_string());
            }
            Some(age) if age < 7 => {
                score += 15;
                negative.push(format!("Contract is only {} days old", age));
            }
            Some(age) if age < 30 => {
                score += 10;
                negative.push(format!("Contract is less than 30 days old ({} days)", age));
            }
            Some(age) if age < 90 => {
                score += 5;
                negative.push(format!("Contract is less than 90 days old ({} days)", age));
            }
            Some(age) => {
                positive.push(format!("Contract has been deployed for {} days", age));
            }
        }

        if let Some(top) = data.top_holder_percentage() {
            if top > 50.0 {
                score += 30;
                negative.push(format!("Top holder controls {:.1}% of supply", top));
            } else if top > 20.0 {
                score += 15;
                negative.push(format!("Top holder controls {:.1}% of supply", top));
            } else if top > 10.0 {
                score += 5;
                negative.push(format!("Top holder controls {:.1}% of supply", top));
            }

            let top10 = data.top10_percentage();
            if top10 > 90.0 {
                score += 20;
                negative.push(format!("Top 10 holders control {:.1}% of supply", top10));
            } else if top10 > 80.0 {
                score += 10;
                negative.push(format!("Top 10 holders control {:.1}% of supply", top10));
            } else if top10 > 70.0 {
                score += 5;
                negative.push(format!("Top 10 holders control {:.1}% of supply", top10));
            }

            if top <= 10.0 && top10 <= 70.0 {
                positive.push("Token supply is well distributed across holders".to_string());
            }
        }

        for finding in &data.findings {
            score += finding.severity.penalty();
            negative.push(format!(
                "{} severity pattern detected: {}",
                finding.severity, finding.pattern
            ));
        }

        RiskSignal::from_raw(RiskCategory::Chain, score, negative, positive)
    }
}

impl Default for ChainRiskScorer {
    fn default() -> Self {
        Self::new()
    }
}
