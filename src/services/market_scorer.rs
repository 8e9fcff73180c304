use crate::models::{MarketData, RiskCategory, RiskSignal};
use bigdecimal::BigDecimal;

/// Scores market price, liquidity, and volatility risk.
///
/// Additive-from-fifty model: the score starts at a neutral prior of 50 and
/// each tier adjusts it up or down. Intentionally distinct from the chain
/// scorer's accumulate-from-zero model; the two encode different semantics
/// and must not be unified.
pub struct MarketRiskScorer;

impl MarketRiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_risk(&self, data: &MarketData) -> RiskSignal {
        let mut score: i64 = 50;
        let mut negative = Vec::new();
        let mut positive = Vec::new();

        if let Some(cap) = &data.market_cap {
            if *cap >= BigDecimal::from(10_000_000_000i64) {
                score -= 15;
                positive.push("Very large market capitalization (over $10B)".to_string());
            } else if *cap >= BigDecimal::from(1_000_000_000i64) {
                score -= 10;
                positive.push("Large market capitalization (over $1B)".to_string());
            } else if *cap < BigDecimal::from(1_000_000) {
                score += 15;
                negative.push("Very small market capitalization (under $1M)".to_string());
            } else if *cap < BigDecimal::from(10_000_000) {
                score += 5;
                negative.push("Small market capitalization (under $10M)".to_string());
            }
        }

        if let Some(rank) = data.market_cap_rank {
            if rank <= 10 {
                score -= 15;
                positive.push(format!("Ranked #{} by market capitalization", rank));
            } else if rank <= 50 {
                score -= 10;
                positive.push(format!("Ranked #{} by market capitalization", rank));
            } else if rank <= 100 {
                score -= 5;
                positive.push(format!("Ranked #{} by market capitalization", rank));
            } else if rank > 1000 {
                score += 15;
                negative.push(format!("Ranked #{} by market capitalization", rank));
            } else if rank > 500 {
                score += 10;
                negative.push(format!("Ranked #{} by market capitalization", rank));
            }
        }

        if let Some(ratio) = data.liquidity_ratio() {
            if ratio > 0.2 {
                score -= 10;
                positive.push(format!(
                    "High trading liquidity (volume is {:.0}% of market cap)",
                    ratio * 100.0
                ));
            } else if ratio > 0.1 {
                score -= 5;
                positive.push(format!(
                    "Healthy trading liquidity (volume is {:.0}% of market cap)",
                    ratio * 100.0
                ));
            } else if ratio < 0.02 {
                score += 15;
                negative.push(format!(
                    "Very thin trading volume ({:.1}% of market cap)",
                    ratio * 100.0
                ));
            } else if ratio < 0.05 {
                score += 5;
                negative.push(format!(
                    "Thin trading volume ({:.1}% of market cap)",
                    ratio * 100.0
                ));
            }
        }

        // The low-volatility bonus needs at least one observed return;
        // an empty series must not read as calm markets.
        let vol = data.volatility();
        if vol > 0.10 {
            score += 15;
            negative.push(format!("Extreme daily volatility ({:.1}%)", vol * 100.0));
        } else if vol > 0.05 {
            score += 5;
            negative.push(format!("Elevated daily volatility ({:.1}%)", vol * 100.0));
        } else if vol < 0.02 && data.price_series.len() >= 2 {
            score -= 5;
            positive.push(format!("Low daily volatility ({:.1}%)", vol * 100.0));
        }

        if let Some(ath) = data.ath_change_percentage {
            if ath > -20.0 {
                score -= 5;
                positive.push(format!(
                    "Price is within {:.0}% of its all-time high",
                    ath.abs()
                ));
            } else if ath < -80.0 {
                score += 5;
                negative.push(format!("Price is {:.0}% below its all-time high", ath.abs()));
            }
        }

        if let Some(change) = data.price_change_24h {
            if change <= -20.0 {
                negative.push(format!("Price dropped {:.1}% in the last 24 hours", change.abs()));
            }
        }
        if let Some(change) = data.price_change_7d {
            if change <= -40.0 {
                negative.push(format!("Price dropped {:.1}% over the last 7 days", change.abs()));
            }
        }
        if let Some(change) = data.price_change_30d {
            if change <= -60.0 {
                negative.push(format!("Price dropped {:.1}% over the last 30 days", change.abs()));
            }
        }

        RiskSignal::from_raw(RiskCategory::Market, score, negative, positive)
    }
}

impl Default for MarketRiskScorer {
    fn default() -> Self {
        Self::new()
    }
}
