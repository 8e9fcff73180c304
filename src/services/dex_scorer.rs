use crate::models::{DexData, RiskCategory, RiskLevel, RiskSignal};
use crate::utils::math;
use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

/// Liquidity tier classification: sub-score seeds the running total and
/// carries its own liquidity level and evidence string.
struct LiquidityTier {
    sub_score: i64,
    level: RiskLevel,
    factor: String,
}

fn classify_liquidity(liquidity: &BigDecimal) -> LiquidityTier {
    if *liquidity < BigDecimal::from(10_000) {
        LiquidityTier {
            sub_score: 90,
            level: RiskLevel::High,
            factor: "Critically low pool liquidity (under $10K)".to_string(),
        }
    } else if *liquidity < BigDecimal::from(50_000) {
        LiquidityTier {
            sub_score: 75,
            level: RiskLevel::High,
            factor: "Very low pool liquidity (under $50K)".to_string(),
        }
    } else if *liquidity < BigDecimal::from(100_000) {
        LiquidityTier {
            sub_score: 60,
            level: RiskLevel::Medium,
            factor: "Low pool liquidity (under $100K)".to_string(),
        }
    } else if *liquidity < BigDecimal::from(500_000) {
        LiquidityTier {
            sub_score: 40,
            level: RiskLevel::Medium,
            factor: "Moderate pool liquidity (under $500K)".to_string(),
        }
    } else if *liquidity < BigDecimal::from(1_000_000) {
        LiquidityTier {
            sub_score: 25,
            level: RiskLevel::Low,
            factor: "Good pool liquidity (over $500K)".to_string(),
        }
    } else {
        LiquidityTier {
            sub_score: 10,
            level: RiskLevel::Low,
            factor: "Deep pool liquidity (over $1M)".to_string(),
        }
    }
}

/// Scores DEX liquidity and trading risk.
///
/// The liquidity tier's sub-score seeds the running total (mid-tier
/// liquidity lands near the neutral 50), then volume, flow, price, and
/// venue tiers adjust it.
pub struct DexRiskScorer;

impl DexRiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_risk(&self, data: &DexData) -> RiskSignal {
        let mut negative = Vec::new();
        let mut positive = Vec::new();

        let tier = classify_liquidity(&data.total_liquidity_usd);
        let mut score = tier.sub_score;
        match tier.level {
            RiskLevel::Low => positive.push(tier.factor),
            RiskLevel::Medium | RiskLevel::High => negative.push(tier.factor),
        }

        let volume = data.volume_24h_usd.to_f64().unwrap_or(0.0);
        if volume < 1_000.0 {
            score += 15;
            negative.push("Very low 24h trading volume (under $1K)".to_string());
        } else if volume < 10_000.0 {
            score += 5;
            negative.push("Low 24h trading volume (under $10K)".to_string());
        } else if volume > 1_000_000.0 {
            score -= 10;
            positive.push("Heavy 24h trading volume (over $1M)".to_string());
        } else if volume > 100_000.0 {
            score -= 5;
            positive.push("Solid 24h trading volume (over $100K)".to_string());
        }

        if let Some(churn) = math::safe_ratio(&data.volume_24h_usd, &data.total_liquidity_usd) {
            if churn > 5.0 {
                score += 10;
                negative.push(format!(
                    "24h volume is {:.1}x pool liquidity, possible wash trading",
                    churn
                ));
            } else if churn < 0.05 {
                score += 5;
                negative.push("Trading is stagnant relative to pool liquidity".to_string());
            }
        }

        let metrics = data.trade_flow_metrics();
        if metrics.suspicious {
            score += 10;
            negative.push(format!(
                "Suspicious buy/sell imbalance (ratio {:.1}, ${:.0} per transaction)",
                metrics.buy_sell_ratio, metrics.volume_per_tx
            ));
        } else if metrics.buy_sell_ratio < 0.5 {
            score += 10;
            negative.push(format!(
                "Heavy sell pressure (buy/sell ratio {:.2})",
                metrics.buy_sell_ratio
            ));
        } else if metrics.buy_sell_ratio > 2.0 {
            score -= 5;
            positive.push(format!(
                "Strong buy-side demand (buy/sell ratio {:.2})",
                metrics.buy_sell_ratio
            ));
        }

        if data.price_change_24h <= -30.0 {
            score += 15;
            negative.push(format!(
                "Price crashed {:.1}% in the last 24 hours",
                data.price_change_24h.abs()
            ));
        } else if data.price_change_24h >= 100.0 {
            score += 10;
            negative.push(format!(
                "Suspiciously large 24h pump (+{:.1}%)",
                data.price_change_24h
            ));
        }

        if data.venue_count > 3 {
            score -= 5;
            positive.push(format!("Trades on {} distinct venues", data.venue_count));
        }

        RiskSignal::from_raw(RiskCategory::Dex, score, negative, positive)
    }
}

impl Default for DexRiskScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_pair() -> DexData {
        DexData {
            total_liquidity_usd: BigDecimal::from(2_000_000),
            volume_24h_usd: BigDecimal::from(500_000),
            buys_24h: 600,
            sells_24h: 550,
            price_change_24h: 2.5,
            venue_count: 5,
        }
    }

    #[test]
    fn test_healthy_pair_scores_low() {
        let signal = DexRiskScorer::new().compute_risk(&healthy_pair());
        // liquidity tier 10, volume -5, venues -5: 0
        assert_eq!(signal.score, 0);
        assert_eq!(signal.level, RiskLevel::Low);
        assert!(signal.negative_factors.is_empty());
    }

    #[test]
    fn test_liquidity_tier_boundaries() {
        let scorer = DexRiskScorer::new();
        let mut data = healthy_pair();

        data.total_liquidity_usd = BigDecimal::from(9_999);
        let critically_low = scorer.compute_risk(&data);
        assert!(critically_low
            .negative_factors
            .iter()
            .any(|f| f.contains("under $10K")));

        data.total_liquidity_usd = BigDecimal::from(450_000);
        let moderate = scorer.compute_risk(&data);
        assert!(moderate
            .negative_factors
            .iter()
            .any(|f| f.contains("under $500K")));
    }

    #[test]
    fn test_imbalanced_flow_is_flagged() {
        let data = DexData {
            total_liquidity_usd: BigDecimal::from(2_000_000),
            volume_24h_usd: BigDecimal::from(100_000),
            buys_24h: 100,
            sells_24h: 10,
            price_change_24h: 0.0,
            venue_count: 2,
        };
        let signal = DexRiskScorer::new().compute_risk(&data);
        assert!(signal
            .negative_factors
            .iter()
            .any(|f| f.contains("Suspicious buy/sell imbalance (ratio 10.0, $909 per transaction)")));
    }

    #[test]
    fn test_sell_pressure_adds_risk_and_buy_demand_subtracts() {
        let mut selling = healthy_pair();
        selling.buys_24h = 100;
        selling.sells_24h = 300;

        let mut buying = healthy_pair();
        buying.buys_24h = 300;
        buying.sells_24h = 100;

        let scorer = DexRiskScorer::new();
        let balanced = scorer.compute_risk(&healthy_pair()).score;
        assert_eq!(scorer.compute_risk(&selling).score as i64, balanced as i64 + 10);
        // buy-side bonus is clamped at the floor from the balanced baseline of 0
        assert!(scorer.compute_risk(&buying).score <= balanced);
    }

    #[test]
    fn test_crash_and_pump_both_add_risk() {
        let scorer = DexRiskScorer::new();

        let mut crashed = healthy_pair();
        crashed.price_change_24h = -45.0;
        assert!(scorer
            .compute_risk(&crashed)
            .negative_factors
            .iter()
            .any(|f| f.contains("crashed 45.0%")));

        let mut pumped = healthy_pair();
        pumped.price_change_24h = 250.0;
        assert!(scorer
            .compute_risk(&pumped)
            .negative_factors
            .iter()
            .any(|f| f.contains("pump (+250.0%)")));
    }

    #[test]
    fn test_rug_profile_scores_high() {
        let data = DexData {
            total_liquidity_usd: BigDecimal::from(4_000),
            volume_24h_usd: BigDecimal::from(30_000),
            buys_24h: 3,
            sells_24h: 120,
            price_change_24h: -85.0,
            venue_count: 1,
        };
        let signal = DexRiskScorer::new().compute_risk(&data);
        // tier 90, churn 7.5x +10, ratio 0.025 suspicious +10, crash +15: clamp 100
        assert_eq!(signal.score, 100);
        assert_eq!(signal.level, RiskLevel::High);
    }
}
