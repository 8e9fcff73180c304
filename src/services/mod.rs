pub mod aggregator;
pub mod assessment_service;
pub mod chain_scorer;
pub mod dex_scorer;
pub mod market_scorer;
pub mod providers;
pub mod registry;
pub mod sentiment_scorer;
pub mod sink;

pub use aggregator::*;
pub use assessment_service::*;
pub use chain_scorer::*;
pub use dex_scorer::*;
pub use market_scorer::*;
pub use providers::*;
pub use registry::*;
pub use sentiment_scorer::*;
pub use sink::*;
