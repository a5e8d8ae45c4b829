use crate::analysis::{ConditionEngine, ProductRecord};
use chrono::{Duration, NaiveDate};

/// Fixed evaluation date so the relative fixtures below stay deterministic.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn days_ago(days: i64) -> String {
    (today() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub(super) fn record(
    supplied_days_ago: i64,
    inspections_days_ago: &[i64],
    status: &str,
) -> ProductRecord {
    ProductRecord {
        product_id: "TF-1042".to_string(),
        vendor: "Raj Metal Works".to_string(),
        batch_no: "B-88".to_string(),
        date_of_supply: days_ago(supplied_days_ago),
        warranty_period: "24 months".to_string(),
        status: status.to_string(),
        inspection_dates: inspections_days_ago.iter().map(|d| days_ago(*d)).collect(),
    }
}

pub(super) fn engine() -> ConditionEngine {
    ConditionEngine::new()
}
