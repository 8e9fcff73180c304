use crate::models::{ChainData, DexData, MarketData, RiskCategory, RiskSignal, SentimentData};
use crate::services::{ChainRiskScorer, DexRiskScorer, MarketRiskScorer, SentimentRiskScorer};

/// A fetched record tagged with its domain, ready to be scored.
#[derive(Debug, Clone)]
pub enum DomainRecord {
    Chain(ChainData),
    Sentiment(SentimentData),
    Market(MarketData),
    Dex(DexData),
}

impl DomainRecord {
    pub fn category(&self) -> RiskCategory {
        match self {
            DomainRecord::Chain(_) => RiskCategory::Chain,
            DomainRecord::Sentiment(_) => RiskCategory::Sentiment,
            DomainRecord::Market(_) => RiskCategory::Market,
            DomainRecord::Dex(_) => RiskCategory::Dex,
        }
    }
}

/// Dispatches a tagged record to the scorer for its domain.
///
/// Composition over inheritance: the scorers share no base type, and the
/// host layer routes through this registry instead of registering named
/// handlers at runtime.
pub struct ScorerRegistry {
    chain: ChainRiskScorer,
    sentiment: SentimentRiskScorer,
    market: MarketRiskScorer,
    dex: DexRiskScorer,
}

impl ScorerRegistry {
    pub fn new() -> Self {
        Self {
            chain: ChainRiskScorer::new(),
            sentiment: SentimentRiskScorer::new(),
            market: MarketRiskScorer::new(),
            dex: DexRiskScorer::new(),
        }
    }

    pub fn score(&self, record: &DomainRecord) -> RiskSignal {
        match record {
            DomainRecord::Chain(data) => self.chain.compute_risk(data),
            DomainRecord::Sentiment(data) => self.sentiment.compute_risk(data),
            DomainRecord::Market(data) => self.market.compute_risk(data),
            DomainRecord::Dex(data) => self.dex.compute_risk(data),
        }
    }
}

impl Default for ScorerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_category_matches_record_category() {
        let registry = ScorerRegistry::new();
        let record = DomainRecord::Sentiment(SentimentData::default());
        let signal = registry.score(&record);
        assert_eq!(signal.category, record.category());
        assert_eq!(signal.category, RiskCategory::Sentiment);
    }

    #[test]
    fn test_dex_record_routes_to_dex_scorer() {
        use bigdecimal::BigDecimal;
        let registry = ScorerRegistry::new();
        let record = DomainRecord::Dex(DexData {
            total_liquidity_usd: BigDecimal::from(5_000),
            volume_24h_usd: BigDecimal::from(500),
            buys_24h: 1,
            sells_24h: 1,
            price_change_24h: 0.0,
            venue_count: 1,
        });
        let signal = registry.score(&record);
        assert_eq!(signal.category, RiskCategory::Dex);
        assert!(signal.score > 70);
    }
}
