use crate::error::AppError;
use crate::models::ComprehensiveAssessment;
use async_trait::async_trait;
use tracing::info;

/// Output port for finished assessments. Delivery surfaces (chat reply,
/// webhook, report writer) implement this in the host layer so the
/// computation never embeds messaging concerns.
#[async_trait]
pub trait AssessmentSink: Send + Sync {
    async fn publish(&self, assessment: &ComprehensiveAssessment) -> Result<(), AppError>;
}

/// Default sink that records the outcome to the log stream.
pub struct TracingSink;

#[async_trait]
impl AssessmentSink for TracingSink {
    async fn publish(&self, assessment: &ComprehensiveAssessment) -> Result<(), AppError> {
        info!(
            identifier = %assessment.project_identifier,
            score = assessment.overall_score,
            level = %assessment.overall_level,
            categories = assessment.breakdown.len(),
            "risk assessment completed"
        );
        Ok(())
    }
}
