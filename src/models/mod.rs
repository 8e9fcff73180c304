pub mod assessment;
pub mod chain_data;
pub mod dex_data;
pub mod market_data;
pub mod sentiment_data;
pub mod signal;

pub use assessment::*;
pub use chain_data::*;
pub use dex_data::*;
pub use market_data::*;
pub use sentiment_data::*;
pub use signal::*;
