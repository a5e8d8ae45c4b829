use serde::{Deserialize, Serialize};
use std::fmt;

/// Maintenance record for a single track fitting as served by the product API.
///
/// Dates stay as the wire strings; the calendar helpers parse them when the
/// scorer runs so a malformed date is reported against the exact raw value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub product_id: String,
    pub vendor: String,
    pub batch_no: String,
    pub date_of_supply: String,
    pub warranty_period: String,
    pub status: String,
    pub inspection_dates: Vec<String>,
}

/// Condition classification derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    Good,
    Warning,
    Critical,
}

const CRITICAL_FLOOR: u8 = 70;
const WARNING_FLOOR: u8 = 40;

impl Condition {
    /// Total, non-overlapping partition of the score range; lower bounds are
    /// inclusive.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= CRITICAL_FLOOR => Self::Critical,
            s if s >= WARNING_FLOOR => Self::Warning,
            _ => Self::Good,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }

    pub const fn badge(self) -> &'static str {
        match self {
            Self::Good => "\u{1f7e2}",
            Self::Warning => "\u{1f7e1}",
            Self::Critical => "\u{1f534}",
        }
    }
}

/// Days since the most recent inspection, with an explicit marker for
/// fittings that have never been inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionRecency {
    Days(i64),
    Never,
}

impl InspectionRecency {
    /// `Never` sits above every finite threshold so an uninspected fitting
    /// always lands in the most overdue band.
    pub fn is_beyond(self, threshold_days: i64) -> bool {
        match self {
            Self::Days(days) => days > threshold_days,
            Self::Never => true,
        }
    }
}

impl fmt::Display for InspectionRecency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days} days ago"),
            Self::Never => write!(f, "never"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries_are_inclusive_on_the_lower_bound() {
        assert_eq!(Condition::from_score(0), Condition::Good);
        assert_eq!(Condition::from_score(39), Condition::Good);
        assert_eq!(Condition::from_score(40), Condition::Warning);
        assert_eq!(Condition::from_score(69), Condition::Warning);
        assert_eq!(Condition::from_score(70), Condition::Critical);
        assert_eq!(Condition::from_score(100), Condition::Critical);
    }

    #[test]
    fn never_inspected_exceeds_every_threshold() {
        assert!(InspectionRecency::Never.is_beyond(90));
        assert!(InspectionRecency::Never.is_beyond(180));
        assert!(InspectionRecency::Never.is_beyond(i64::MAX - 1));
    }

    #[test]
    fn finite_recency_compares_strictly() {
        assert!(!InspectionRecency::Days(90).is_beyond(90));
        assert!(InspectionRecency::Days(91).is_beyond(90));
    }

    #[test]
    fn recency_display_covers_both_shapes() {
        assert_eq!(InspectionRecency::Days(12).to_string(), "12 days ago");
        assert_eq!(InspectionRecency::Never.to_string(), "never");
    }
}
