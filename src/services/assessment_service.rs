use crate::config::RiskSettings;
use crate::error::AppError;
use crate::models::{ComprehensiveAssessment, RiskCategory, RiskSignal};
use crate::services::aggregator::AggregationEngine;
use crate::services::providers::ProviderSet;
use crate::services::registry::{DomainRecord, ScorerRegistry};
use crate::services::sink::AssessmentSink;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// Orchestrates one evaluation: fetches the four domain records
/// concurrently, scores whatever arrived, and aggregates.
///
/// Each branch carries its own failure boundary. A provider error or an
/// expired branch timeout converts that category to absent; it never
/// aborts or delays the other branches, and it never becomes a score of 0.
pub struct AssessmentService {
    providers: ProviderSet,
    registry: ScorerRegistry,
    engine: AggregationEngine,
    weights: HashMap<RiskCategory, f64>,
    branch_timeout: Option<Duration>,
    sink: Option<Arc<dyn AssessmentSink>>,
}

impl AssessmentService {
    pub fn new(providers: ProviderSet, settings: &RiskSettings) -> Self {
        Self {
            providers,
            registry: ScorerRegistry::new(),
            engine: AggregationEngine::with_factor_cap(settings.factor_cap),
            weights: settings.weights(),
            branch_timeout: settings.branch_timeout(),
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn AssessmentSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub async fn assess(&self, identifier: &str) -> Result<ComprehensiveAssessment, AppError> {
        let request_id = Uuid::new_v4();
        info!(%request_id, identifier, "starting comprehensive risk assessment");

        let (chain, sentiment, market, dex) = tokio::join!(
            self.fetch_chain(identifier),
            self.fetch_sentiment(identifier),
            self.fetch_market(identifier),
            self.fetch_dex(identifier),
        );

        let mut signals: HashMap<RiskCategory, RiskSignal> = HashMap::new();
        for record in [chain, sentiment, market, dex].into_iter().flatten() {
            let signal = self.registry.score(&record);
            signals.insert(signal.category, signal);
        }

        info!(
            %request_id,
            present = signals.len(),
            "aggregating risk signals"
        );
        let assessment =
            self.engine
                .compute_comprehensive_assessment(identifier, &signals, &self.weights)?;

        if let Some(sink) = &self.sink {
            if let Err(e) = sink.publish(&assessment).await {
                warn!(%request_id, error = %e, "failed to publish assessment");
            }
        }

        Ok(assessment)
    }

    async fn fetch_chain(&self, identifier: &str) -> Option<DomainRecord> {
        let provider = self.providers.chain.as_ref()?;
        self.bounded(RiskCategory::Chain, provider.fetch(identifier))
            .await
            .map(DomainRecord::Chain)
    }

    async fn fetch_sentiment(&self, identifier: &str) -> Option<DomainRecord> {
        let provider = self.providers.sentiment.as_ref()?;
        self.bounded(RiskCategory::Sentiment, provider.fetch(identifier))
            .await
            .map(DomainRecord::Sentiment)
    }

    async fn fetch_market(&self, identifier: &str) -> Option<DomainRecord> {
        let provider = self.providers.market.as_ref()?;
        self.bounded(RiskCategory::Market, provider.fetch(identifier))
            .await
            .map(DomainRecord::Market)
    }

    async fn fetch_dex(&self, identifier: &str) -> Option<DomainRecord> {
        let provider = self.providers.dex.as_ref()?;
        self.bounded(RiskCategory::Dex, provider.fetch(identifier))
            .await
            .map(DomainRecord::Dex)
    }

    /// Runs one fetch under the optional branch timeout and converts any
    /// failure into absence for the category.
    async fn bounded<T>(
        &self,
        category: RiskCategory,
        fut: impl Future<Output = Result<T, AppError>>,
    ) -> Option<T> {
        let result = match self.branch_timeout {
            Some(limit) => match tokio::time::timeout(limit, fut).await {
                Ok(inner) => inner,
                Err(_) => Err(AppError::Timeout(category.to_string())),
            },
            None => fut.await,
        };

        match result {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(%category, error = %e, "risk source unavailable, category treated as absent");
                None
            }
        }
    }
}
