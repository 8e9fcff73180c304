use crate::models::{RiskCategory, RiskSignal, SentimentData};

const LOW_VOLUME_THRESHOLD: u32 = 10;
const HIGH_VOLUME_THRESHOLD: u32 = 100;
const LOW_ENGAGEMENT_RATE: f64 = 0.005;
const HIGH_ENGAGEMENT_RATE: f64 = 0.05;

/// Scores social-sentiment risk by linear inversion of the averaged
/// sentiment value: bullish consensus maps toward 0, bearish toward 100.
///
/// This is the one scorer permitted to self-report a neutral default when
/// there is no data at all, because absence of discussion is itself
/// informative for a traded asset.
pub struct SentimentRiskScorer;

impl SentimentRiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_risk(&self, data: &SentimentData) -> RiskSignal {
        if !data.has_data() {
            return RiskSignal::from_raw(
                RiskCategory::Sentiment,
                50,
                vec!["No recent social activity found for this asset".to_string()],
                vec![],
            );
        }

        // has_data() guarantees a scalar or a percentage split exists
        let sentiment = data.effective_sentiment().unwrap_or(0.0);
        let score = ((1.0 - sentiment) / 2.0 * 100.0).round() as i64;

        let mut negative = Vec::new();
        let mut positive = Vec::new();

        if let Some(neg_pct) = data.negative_pct {
            if neg_pct > 50.0 {
                negative.push(format!("{:.0}% of recent mentions are negative", neg_pct));
            }
        }
        if let Some(pos_pct) = data.positive_pct {
            if pos_pct > 60.0 {
                positive.push(format!("{:.0}% of recent mentions are positive", pos_pct));
            }
        }

        if data.sample_size < LOW_VOLUME_THRESHOLD {
            negative.push(format!(
                "Very low discussion volume ({} recent mentions)",
                data.sample_size
            ));
        } else if data.sample_size >= HIGH_VOLUME_THRESHOLD {
            positive.push(format!(
                "Active discussion volume ({} recent mentions)",
                data.sample_size
            ));
        }

        if let Some(rate) = data.engagement_rate {
            if rate < LOW_ENGAGEMENT_RATE {
                negative.push("Very low engagement on recent posts".to_string());
            } else if rate > HIGH_ENGAGEMENT_RATE {
                positive.push("High engagement on recent posts".to_string());
            }
        }

        RiskSignal::from_raw(RiskCategory::Sentiment, score, negative, positive)
    }
}

impl Default for SentimentRiskScorer {
    fn default() -> Self {
        Self::new()
    }
}
