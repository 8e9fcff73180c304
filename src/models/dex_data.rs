use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// DEX trading record aggregated across all pairs of the asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexData {
    /// Sum of pool liquidity in USD across all trading pairs.
    pub total_liquidity_usd: BigDecimal,
    pub volume_24h_usd: BigDecimal,
    pub buys_24h: u64,
    pub sells_24h: u64,
    pub price_change_24h: f64,
    /// Number of distinct venues (DEXes) the asset trades on.
    pub venue_count: u32,
}

/// Transaction-flow metrics derived from a `DexData` record, exposed
/// alongside the dex risk signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeFlowMetrics {
    pub buy_sell_ratio: f64,
    pub volume_per_tx: f64,
    pub suspicious: bool,
}

const SUSPICIOUS_RATIO_HIGH: f64 = 10.0;
const SUSPICIOUS_RATIO_LOW: f64 = 0.1;

impl DexData {
    pub fn trade_flow_metrics(&self) -> TradeFlowMetrics {
        let buy_sell_ratio = if self.sells_24h == 0 {
            if self.buys_24h > 0 {
                2.0
            } else {
                1.0
            }
        } else {
            self.buys_24h as f64 / self.sells_24h as f64
        };

        let total_txs = self.buys_24h + self.sells_24h;
        let volume_per_tx = if total_txs == 0 {
            0.0
        } else {
            self.volume_24h_usd.to_f64().unwrap_or(0.0) / total_txs as f64
        };

        let suspicious =
            buy_sell_ratio >= SUSPICIOUS_RATIO_HIGH || buy_sell_ratio <= SUSPICIOUS_RATIO_LOW;

        TradeFlowMetrics {
            buy_sell_ratio,
            volume_per_tx,
            suspicious,
        }
    }
}
