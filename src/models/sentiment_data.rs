use serde::{Deserialize, Serialize};

/// Aggregated social-sentiment record produced by the search collaborator.
///
/// The collaborator averages per-item classifications into
/// `average_sentiment` in [-1, 1] and/or a percentage split per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentData {
    pub average_sentiment: Option<f64>,
    pub positive_pct: Option<f64>,
    pub negative_pct: Option<f64>,
    pub neutral_pct: Option<f64>,
    /// Number of items the classification was computed from.
    pub sample_size: u32,
    /// Average engagements per item divided by author reach.
    pub engagement_rate: Option<f64>,
}

impl SentimentData {
    pub fn has_data(&self) -> bool {
        self.sample_size > 0
            && (self.average_sentiment.is_some()
                || self.positive_pct.is_some()
                || self.negative_pct.is_some())
    }

    /// Scalar sentiment in [-1, 1]: the averaged value when present,
    /// otherwise derived from the positive/negative percentage split.
    pub fn effective_sentiment(&self) -> Option<f64> {
        if let Some(avg) = self.average_sentiment {
            return Some(avg);
        }
        match (self.positive_pct, self.negative_pct) {
            (Some(pos), Some(neg)) => Some((pos - neg) / 100.0),
            (Some(pos), None) => Some(pos / 100.0),
            (None, Some(neg)) => Some(-neg / 100.0),
            (None, None) => None,
        }
    }
}
