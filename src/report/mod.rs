mod views;

pub use views::{AnalysisView, ProductInfoView};

use crate::analysis::{ConditionAnalysis, ProductRecord};
use serde::Serialize;

/// Full report for one fitting: the record's descriptive fields, the
/// analysis block, and the ordered maintenance recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductReport {
    pub product: ProductInfoView,
    pub analysis: AnalysisView,
    pub recommendations: Vec<String>,
}

impl ProductReport {
    pub fn assemble(record: &ProductRecord, analysis: &ConditionAnalysis) -> Self {
        let condition = analysis.condition;

        Self {
            product: ProductInfoView {
                product_id: record.product_id.clone(),
                vendor: record.vendor.clone(),
                batch_no: record.batch_no.clone(),
                supply_date: record.date_of_supply.clone(),
                warranty: record.warranty_period.clone(),
                status: record.status.clone(),
            },
            analysis: AnalysisView {
                condition,
                condition_label: format!("{} {}", condition.badge(), condition.label()),
                risk_score: analysis.risk_score,
                risk_score_display: format!("{}/100", analysis.risk_score),
                age_months: analysis.age_months,
                age_display: format!("{} months", analysis.age_months),
                last_inspection_display: analysis.inspection_recency.to_string(),
                risk_factors: analysis.risk_factors.clone(),
            },
            recommendations: analysis.recommendations.clone(),
        }
    }
}
