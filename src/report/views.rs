use crate::analysis::{Condition, RiskFactor};
use serde::Serialize;

/// Descriptive fields passed through unmodified from the fetched record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductInfoView {
    pub product_id: String,
    pub vendor: String,
    pub batch_no: String,
    pub supply_date: String,
    pub warranty: String,
    pub status: String,
}

/// Analysis block combining the classification with its display strings, so
/// the console renderer and the JSON output share one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisView {
    pub condition: Condition,
    pub condition_label: String,
    pub risk_score: u8,
    pub risk_score_display: String,
    pub age_months: i64,
    pub age_display: String,
    pub last_inspection_display: String,
    pub risk_factors: Vec<RiskFactor>,
}
