use crate::analysis::{AnalysisError, ConditionEngine};
use crate::report::ProductReport;
use crate::source::ProductSource;
use chrono::NaiveDate;
use tracing::warn;

/// Outcome of a single analysis request. Not-found, transport, and
/// malformed-payload failures all collapse into `Unavailable`.
#[derive(Debug)]
pub enum AnalysisOutcome {
    Report(Box<ProductReport>),
    Unavailable { product_id: String },
}

/// Sequences one request: fetch the record, score it, assemble the report.
pub struct ConditionAnalyzer<S> {
    source: S,
    engine: ConditionEngine,
}

impl<S: ProductSource> ConditionAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            engine: ConditionEngine::new(),
        }
    }

    /// Lookup failures become the unavailable outcome; scoring failures on a
    /// fetched record surface as errors scoped to this request.
    pub async fn analyze(
        &self,
        product_id: &str,
        today: NaiveDate,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let record = match self.source.fetch(product_id).await {
            Ok(record) => record,
            Err(error) => {
                warn!(%product_id, %error, "product lookup failed");
                return Ok(AnalysisOutcome::Unavailable {
                    product_id: product_id.to_string(),
                });
            }
        };

        let analysis = self.engine.analyze(&record, today)?;
        Ok(AnalysisOutcome::Report(Box::new(ProductReport::assemble(
            &record, &analysis,
        ))))
    }
}
