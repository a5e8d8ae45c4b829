use super::domain::{Condition, InspectionRecency};

const INSPECTION_FOLLOWUP_DAYS: i64 = 90;
const PROACTIVE_PLANNING_MONTHS: i64 = 36;

/// Maintenance actions for one analysis. The condition block comes first,
/// then the overdue-inspection and proactive-planning lines, which apply
/// independently of the condition.
pub(crate) fn for_analysis(
    condition: Condition,
    age_months: i64,
    recency: InspectionRecency,
) -> Vec<String> {
    let mut recommendations: Vec<String> = match condition {
        Condition::Critical => vec![
            "IMMEDIATE ACTION: Replace component immediately".to_string(),
            "Schedule emergency maintenance".to_string(),
            "Conduct thorough safety inspection".to_string(),
        ],
        Condition::Warning => vec![
            "Schedule replacement within 30 days".to_string(),
            "Increase inspection frequency to weekly".to_string(),
            "Monitor closely for deterioration".to_string(),
        ],
        Condition::Good => vec![
            "Continue normal operation".to_string(),
            "Maintain regular inspection schedule".to_string(),
        ],
    };

    if recency.is_beyond(INSPECTION_FOLLOWUP_DAYS) {
        recommendations.push(match recency {
            InspectionRecency::Days(days) => format!("Schedule inspection (last: {days} days ago)"),
            InspectionRecency::Never => {
                "Schedule inspection (no inspection on record)".to_string()
            }
        });
    }

    if age_months > PROACTIVE_PLANNING_MONTHS {
        recommendations.push("Consider proactive replacement planning".to_string());
    }

    recommendations
}
