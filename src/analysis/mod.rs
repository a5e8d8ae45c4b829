//! Condition scoring for fetched track fitting records.
//!
//! The scorer is deterministic and does no I/O: age and inspection recency
//! come from the record's dates against an injected evaluation date, risk
//! contributions come from the graduated band tables in `rules`, and the
//! classification partitions the clamped score.

mod calendar;
pub mod domain;
mod recommend;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{Condition, InspectionRecency, ProductRecord};
pub use rules::{RiskFactor, RiskFactorKind};

use chrono::NaiveDate;

const MAX_RISK_SCORE: u16 = 100;

/// Failures while scoring a fetched record. Both variants abort the single
/// request; the session keeps serving subsequent requests.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("malformed date '{value}' (expected YYYY-MM-DD)")]
    MalformedDate { value: String },
    #[error("required field '{field}' is blank")]
    BlankField { field: &'static str },
}

/// Composite wear estimate for a single fitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionAnalysis {
    pub condition: Condition,
    pub risk_score: u8,
    pub risk_factors: Vec<RiskFactor>,
    pub age_months: i64,
    pub inspection_recency: InspectionRecency,
    pub recommendations: Vec<String>,
}

/// Stateless scorer applying the band tables to one record at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionEngine;

impl ConditionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score one record against `today`. Raw contributions may sum past 100;
    /// only the reported score is clamped.
    pub fn analyze(
        &self,
        record: &ProductRecord,
        today: NaiveDate,
    ) -> Result<ConditionAnalysis, AnalysisError> {
        if record.status.trim().is_empty() {
            return Err(AnalysisError::BlankField { field: "status" });
        }
        if record.date_of_supply.trim().is_empty() {
            return Err(AnalysisError::BlankField {
                field: "dateOfSupply",
            });
        }

        let age_months = calendar::age_in_months(&record.date_of_supply, today)?;
        let inspection_recency = calendar::inspection_recency(&record.inspection_dates, today)?;

        let mut risk_factors = Vec::new();
        risk_factors.extend(rules::age_contribution(age_months));
        risk_factors.extend(rules::inspection_contribution(inspection_recency));
        risk_factors.extend(rules::status_contribution(&record.status));

        let raw_score: u16 = risk_factors
            .iter()
            .map(|factor| u16::from(factor.weight))
            .sum();
        let risk_score = raw_score.min(MAX_RISK_SCORE) as u8;
        let condition = Condition::from_score(risk_score);
        let recommendations = recommend::for_analysis(condition, age_months, inspection_recency);

        Ok(ConditionAnalysis {
            condition,
            risk_score,
            risk_factors,
            age_months,
            inspection_recency,
            recommendations,
        })
    }
}
