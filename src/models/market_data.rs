use crate::utils::math;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Market-wide price record fetched from the price-chart collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub market_cap: Option<BigDecimal>,
    pub market_cap_rank: Option<u32>,
    pub volume_24h: Option<BigDecimal>,
    pub price_change_24h: Option<f64>,
    pub price_change_7d: Option<f64>,
    pub price_change_30d: Option<f64>,
    /// Daily closing prices, oldest first.
    pub price_series: Vec<BigDecimal>,
    /// Percent distance from the all-time high, e.g. -45.0.
    pub ath_change_percentage: Option<f64>,
}

impl MarketData {
    /// 24h volume divided by market cap; None when either side is missing
    /// or the market cap is zero.
    pub fn liquidity_ratio(&self) -> Option<f64> {
        match (&self.volume_24h, &self.market_cap) {
            (Some(volume), Some(cap)) => math::safe_ratio(volume, cap),
            _ => None,
        }
    }

    /// Population standard deviation of day-over-day returns of the series.
    pub fn volatility(&self) -> f64 {
        math::volatility(&self.price_series)
    }
}
