use crate::error::AppError;
use crate::models::RiskCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub providers: ProviderSettings,
    pub risk: RiskSettings,
    pub logging: LoggingSettings,
}

/// Endpoints and credentials for the external data collaborators. Passed
/// explicitly at construction time; the engine never reads ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub explorer_api_url: String,
    pub explorer_api_key: Option<String>,
    pub social_api_url: String,
    pub social_api_key: Option<String>,
    pub market_api_url: String,
    pub dex_api_url: String,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSettings {
    pub chain_weight: f64,
    pub sentiment_weight: f64,
    pub market_weight: f64,
    pub dex_weight: f64,
    /// Max evidence strings each category contributes to the assessment.
    pub factor_cap: usize,
    /// Per-branch fetch timeout; None disables the bound.
    pub branch_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            providers: ProviderSettings::default(),
            risk: RiskSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        ProviderSettings {
            explorer_api_url: "https://api.etherscan.io/api".to_string(),
            explorer_api_key: None,
            social_api_url: "https://api.twitter.com/2".to_string(),
            social_api_key: None,
            market_api_url: "https://api.coingecko.com/api/v3".to_string(),
            dex_api_url: "https://api.dexscreener.com/latest".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

impl Default for RiskSettings {
    fn default() -> Self {
        RiskSettings {
            chain_weight: 1.0,
            sentiment_weight: 0.8,
            market_weight: 1.0,
            dex_weight: 1.0,
            factor_cap: 3,
            branch_timeout_seconds: Some(10),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
        }
    }
}

impl RiskSettings {
    pub fn weights(&self) -> HashMap<RiskCategory, f64> {
        HashMap::from([
            (RiskCategory::Chain, self.chain_weight),
            (RiskCategory::Sentiment, self.sentiment_weight),
            (RiskCategory::Market, self.market_weight),
            (RiskCategory::Dex, self.dex_weight),
        ])
    }

    pub fn branch_timeout(&self) -> Option<Duration> {
        self.branch_timeout_seconds.map(Duration::from_secs)
    }
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let _settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let defaults = Settings::default();

        Ok(Settings {
            providers: ProviderSettings {
                explorer_api_url: env::var("EXPLORER_API_URL")
                    .unwrap_or(defaults.providers.explorer_api_url),
                explorer_api_key: env::var("EXPLORER_API_KEY").ok(),
                social_api_url: env::var("SOCIAL_API_URL")
                    .unwrap_or(defaults.providers.social_api_url),
                social_api_key: env::var("SOCIAL_API_KEY").ok(),
                market_api_url: env::var("MARKET_API_URL")
                    .unwrap_or(defaults.providers.market_api_url),
                dex_api_url: env::var("DEX_API_URL").unwrap_or(defaults.providers.dex_api_url),
                request_timeout_seconds: env::var("PROVIDER_REQUEST_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.providers.request_timeout_seconds),
            },
            risk: RiskSettings {
                chain_weight: env::var("RISK_CHAIN_WEIGHT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.risk.chain_weight),
                sentiment_weight: env::var("RISK_SENTIMENT_WEIGHT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.risk.sentiment_weight),
                market_weight: env::var("RISK_MARKET_WEIGHT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.risk.market_weight),
                dex_weight: env::var("RISK_DEX_WEIGHT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.risk.dex_weight),
                factor_cap: env::var("RISK_FACTOR_CAP")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.risk.factor_cap),
                branch_timeout_seconds: env::var("RISK_BRANCH_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .or(defaults.risk.branch_timeout_seconds),
            },
            logging: LoggingSettings {
                level: env::var("LOG_LEVEL").unwrap_or(defaults.logging.level),
            },
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for (name, endpoint) in [
            ("EXPLORER_API_URL", &self.providers.explorer_api_url),
            ("SOCIAL_API_URL", &self.providers.social_api_url),
            ("MARKET_API_URL", &self.providers.market_api_url),
            ("DEX_API_URL", &self.providers.dex_api_url),
        ] {
            endpoint.parse::<Url>().map_err(|e| {
                AppError::ConfigError(format!("invalid {}: {}", name, e))
            })?;
        }

        for (category, weight) in self.risk.weights() {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(AppError::ValidationError(format!(
                    "risk weight for {} must be positive, got {}",
                    category, weight
                )));
            }
        }

        Ok(())
    }
}
