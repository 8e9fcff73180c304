use crate::error::AppError;
use crate::models::{ChainData, DexData, MarketData, SentimentData};
use async_trait::async_trait;
use std::sync::Arc;

/// Ports for the four external data collaborators. Concrete fetch clients
/// (explorer, social search, price chart, DEX screener) live in the host
/// layer and plug in here.

#[async_trait]
pub trait ChainDataProvider: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Result<ChainData, AppError>;
}

#[async_trait]
pub trait SentimentDataProvider: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Result<SentimentData, AppError>;
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Result<MarketData, AppError>;
}

#[async_trait]
pub trait DexDataProvider: Send + Sync {
    async fn fetch(&self, identifier: &str) -> Result<DexData, AppError>;
}

/// The collaborators wired into an assessment run. Any subset may be
/// configured; unconfigured categories are simply never assessed.
#[derive(Clone, Default)]
pub struct ProviderSet {
    pub chain: Option<Arc<dyn ChainDataProvider>>,
    pub sentiment: Option<Arc<dyn SentimentDataProvider>>,
    pub market: Option<Arc<dyn MarketDataProvider>>,
    pub dex: Option<Arc<dyn DexDataProvider>>,
}
