use crate::error::AppError;
use crate::models::{ComprehensiveAssessment, RiskCategory, RiskLevel, RiskSignal};
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_FACTOR_CAP: usize = 3;

/// Combines whichever domain signals are available into one assessment.
///
/// Uses a renormalized weighted mean: absent categories are excluded from
/// both numerator and denominator, so missing data is never conflated with
/// absence of risk.
pub struct AggregationEngine {
    factor_cap: usize,
}

impl AggregationEngine {
    pub fn new() -> Self {
        Self {
            factor_cap: DEFAULT_FACTOR_CAP,
        }
    }

    /// Per-category cap on how many factors each domain contributes to the
    /// flattened evidence lists.
    pub fn with_factor_cap(factor_cap: usize) -> Self {
        Self { factor_cap }
    }

    pub fn compute_comprehensive_assessment(
        &self,
        identifier: &str,
        signals: &HashMap<RiskCategory, RiskSignal>,
        weights: &HashMap<RiskCategory, f64>,
    ) -> Result<ComprehensiveAssessment, AppError> {
        for (category, weight) in weights {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(AppError::ValidationError(format!(
                    "aggregation weight for {} must be positive, got {}",
                    category, weight
                )));
            }
        }

        if signals.is_empty() {
            return Ok(ComprehensiveAssessment {
                project_identifier: identifier.to_string(),
                timestamp: Utc::now(),
                overall_score: 50,
                overall_level: RiskLevel::Medium,
                breakdown: BTreeMap::new(),
                risk_factors: vec![
                    "Insufficient data: no risk sources could be assessed".to_string()
                ],
                positive_factors: vec![],
            });
        }

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        let mut breakdown = BTreeMap::new();
        let mut risk_factors = Vec::new();
        let mut positive_factors = Vec::new();

        for category in RiskCategory::ALL {
            let Some(signal) = signals.get(&category) else {
                continue;
            };
            let weight = weights.get(&category).copied().unwrap_or(1.0);
            weighted_sum += weight * signal.score as f64;
            weight_total += weight;
            breakdown.insert(category, signal.score);

            for factor in signal.negative_factors.iter().take(self.factor_cap) {
                risk_factors.push(format!("[{}] {}", category, factor));
            }
            for factor in signal.positive_factors.iter().take(self.factor_cap) {
                positive_factors.push(format!("[{}] {}", category, factor));
            }
        }

        let overall_score = ((weighted_sum / weight_total).round() as i64).clamp(0, 100) as u8;

        Ok(ComprehensiveAssessment {
            project_identifier: identifier.to_string(),
            timestamp: Utc::now(),
            overall_score,
            overall_level: RiskLevel::from_score(overall_score),
            breakdown,
            risk_factors,
            positive_factors,
        })
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn signal(category: RiskCategory, score: i64) -> RiskSignal {
        RiskSignal::from_raw(
            category,
            score,
            vec![format!("{} negative evidence", category)],
            vec![format!("{} positive evidence", category)],
        )
    }

    fn equal_weights() -> HashMap<RiskCategory, f64> {
        RiskCategory::ALL.iter().map(|c| (*c, 1.0)).collect()
    }

    #[test]
    fn test_empty_signal_set_yields_neutral_default() {
        let engine = AggregationEngine::new();
        let assessment = engine
            .compute_comprehensive_assessment("UNKNOWN", &HashMap::new(), &equal_weights())
            .unwrap();
        assert_eq!(assessment.overall_score, 50);
        assert_eq!(assessment.overall_level, RiskLevel::Medium);
        assert!(assessment.breakdown.is_empty());
        assert_eq!(assessment.risk_factors.len(), 1);
        assert!(assessment.risk_factors[0].contains("Insufficient data"));
    }

    #[test]
    fn test_single_signal_identity() {
        let engine = AggregationEngine::new();
        let signals = HashMap::from([(RiskCategory::Market, signal(RiskCategory::Market, 37))]);
        let assessment = engine
            .compute_comprehensive_assessment("TKN", &signals, &equal_weights())
            .unwrap();
        assert_eq!(assessment.overall_score, 37);
        assert_eq!(assessment.overall_level, RiskLevel::Low);
        assert_eq!(assessment.breakdown.len(), 1);
    }

    #[test]
    fn test_absent_categories_excluded_from_denominator() {
        let engine = AggregationEngine::new();
        let signals = HashMap::from([
            (RiskCategory::Chain, signal(RiskCategory::Chain, 80)),
            (RiskCategory::Dex, signal(RiskCategory::Dex, 40)),
        ]);
        // chain weighted 3x dex; sentiment/market weights must not dilute
        let weights = HashMap::from([
            (RiskCategory::Chain, 3.0),
            (RiskCategory::Sentiment, 5.0),
            (RiskCategory::Market, 5.0),
            (RiskCategory::Dex, 1.0),
        ]);
        let assessment = engine
            .compute_comprehensive_assessment("TKN", &signals, &weights)
            .unwrap();
        // (3*80 + 1*40) / 4 = 70
        assert_eq!(assessment.overall_score, 70);
        assert_eq!(assessment.overall_level, RiskLevel::Medium);
        assert!(!assessment.breakdown.contains_key(&RiskCategory::Sentiment));
        assert!(!assessment.breakdown.contains_key(&RiskCategory::Market));
    }

    #[test]
    fn test_factor_compilation_preserves_category_order() {
        let engine = AggregationEngine::new();
        let signals = HashMap::from([
            (RiskCategory::Dex, signal(RiskCategory::Dex, 60)),
            (RiskCategory::Chain, signal(RiskCategory::Chain, 20)),
            (RiskCategory::Market, signal(RiskCategory::Market, 40)),
        ]);
        let assessment = engine
            .compute_comprehensive_assessment("TKN", &signals, &equal_weights())
            .unwrap();
        assert_eq!(assessment.risk_factors.len(), 3);
        assert!(assessment.risk_factors[0].starts_with("[chain]"));
        assert!(assessment.risk_factors[1].starts_with("[market]"));
        assert!(assessment.risk_factors[2].starts_with("[dex]"));
    }

    #[test]
    fn test_factor_cap_is_per_category() {
        let engine = AggregationEngine::with_factor_cap(2);
        let mut chain = signal(RiskCategory::Chain, 90);
        chain.negative_factors = vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
            "fourth".to_string(),
        ];
        let dex = signal(RiskCategory::Dex, 90);
        let signals = HashMap::from([
            (RiskCategory::Chain, chain),
            (RiskCategory::Dex, dex),
        ]);
        let assessment = engine
            .compute_comprehensive_assessment("TKN", &signals, &equal_weights())
            .unwrap();
        // 2 capped chain factors + 1 dex factor
        assert_eq!(assessment.risk_factors.len(), 3);
        assert_eq!(assessment.risk_factors[0], "[chain] first");
        assert_eq!(assessment.risk_factors[1], "[chain] second");
    }

    #[test]
    fn test_non_positive_weight_is_rejected() {
        let engine = AggregationEngine::new();
        let signals = HashMap::from([(RiskCategory::Chain, signal(RiskCategory::Chain, 10))]);
        let weights = HashMap::from([(RiskCategory::Chain, 0.0)]);
        let result = engine.compute_comprehensive_assessment("TKN", &signals, &weights);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    proptest! {
        #[test]
        fn prop_overall_score_stays_in_range(
            chain in 0i64..=100,
            sentiment in 0i64..=100,
            market in 0i64..=100,
            dex in 0i64..=100,
            w_chain in 0.1f64..10.0,
            w_sentiment in 0.1f64..10.0,
            w_market in 0.1f64..10.0,
            w_dex in 0.1f64..10.0,
        ) {
            let engine = AggregationEngine::new();
            let signals = HashMap::from([
                (RiskCategory::Chain, signal(RiskCategory::Chain, chain)),
                (RiskCategory::Sentiment, signal(RiskCategory::Sentiment, sentiment)),
                (RiskCategory::Market, signal(RiskCategory::Market, market)),
                (RiskCategory::Dex, signal(RiskCategory::Dex, dex)),
            ]);
            let weights = HashMap::from([
                (RiskCategory::Chain, w_chain),
                (RiskCategory::Sentiment, w_sentiment),
                (RiskCategory::Market, w_market),
                (RiskCategory::Dex, w_dex),
            ]);
            let assessment = engine
                .compute_comprehensive_assessment("TKN", &signals, &weights)
                .unwrap();
            prop_assert!(assessment.overall_score <= 100);
        }

        #[test]
        fn prop_single_signal_weighted_mean_identity(
            score in 0i64..=100,
            weight in 0.1f64..10.0,
        ) {
            let engine = AggregationEngine::new();
            let signals = HashMap::from([
                (RiskCategory::Sentiment, signal(RiskCategory::Sentiment, score)),
            ]);
            let weights = HashMap::from([(RiskCategory::Sentiment, weight)]);
            let assessment = engine
                .compute_comprehensive_assessment("TKN", &signals, &weights)
                .unwrap();
            prop_assert_eq!(assessment.overall_score as i64, score);
        }
    }
}
