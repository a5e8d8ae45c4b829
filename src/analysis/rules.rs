use super::domain::InspectionRecency;
use serde::Serialize;

/// Rule buckets in their fixed evaluation order: age, inspection recency,
/// reported status. `risk_factors` ordering mirrors this and is never
/// re-sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    ServiceAge,
    InspectionRecency,
    ReportedStatus,
}

/// Discrete contribution from one triggered rule, kept so reports can show
/// how the composite score was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskFactor {
    pub kind: RiskFactorKind,
    pub weight: u8,
    pub note: &'static str,
}

/// One graduated band: applies when the observed value exceeds `beyond`.
#[derive(Debug, Clone, Copy)]
struct RiskBand {
    beyond: i64,
    weight: u8,
    note: &'static str,
}

// Most severe band first; the first match wins, so each bucket contributes
// at most once.
const AGE_BANDS: &[RiskBand] = &[
    RiskBand {
        beyond: 48,
        weight: 40,
        note: "Component exceeding recommended service life",
    },
    RiskBand {
        beyond: 36,
        weight: 25,
        note: "Component approaching end of service life",
    },
    RiskBand {
        beyond: 24,
        weight: 10,
        note: "Component in mid-service period",
    },
];

const INSPECTION_BANDS: &[RiskBand] = &[
    RiskBand {
        beyond: 180,
        weight: 35,
        note: "Overdue for inspection (>6 months)",
    },
    RiskBand {
        beyond: 90,
        weight: 20,
        note: "Due for inspection soon",
    },
];

const STATUS_FLAGS: &[&str] = &["faulty", "damaged", "worn"];
const STATUS_WEIGHT: u8 = 50;

pub(crate) fn age_contribution(age_months: i64) -> Option<RiskFactor> {
    AGE_BANDS
        .iter()
        .find(|band| age_months > band.beyond)
        .map(|band| RiskFactor {
            kind: RiskFactorKind::ServiceAge,
            weight: band.weight,
            note: band.note,
        })
}

pub(crate) fn inspection_contribution(recency: InspectionRecency) -> Option<RiskFactor> {
    INSPECTION_BANDS
        .iter()
        .find(|band| recency.is_beyond(band.beyond))
        .map(|band| RiskFactor {
            kind: RiskFactorKind::InspectionRecency,
            weight: band.weight,
            note: band.note,
        })
}

pub(crate) fn status_contribution(status: &str) -> Option<RiskFactor> {
    let normalized = status.trim().to_lowercase();
    STATUS_FLAGS
        .contains(&normalized.as_str())
        .then_some(RiskFactor {
            kind: RiskFactorKind::ReportedStatus,
            weight: STATUS_WEIGHT,
            note: "Component status indicates issues",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_band_lower_edges_are_exclusive() {
        assert!(age_contribution(24).is_none());
        assert_eq!(age_contribution(25).expect("band").weight, 10);
        assert_eq!(age_contribution(36).expect("band").weight, 10);
        assert_eq!(age_contribution(37).expect("band").weight, 25);
        assert_eq!(age_contribution(48).expect("band").weight, 25);
        assert_eq!(age_contribution(49).expect("band").weight, 40);
    }

    #[test]
    fn inspection_band_lower_edges_are_exclusive() {
        assert!(inspection_contribution(InspectionRecency::Days(90)).is_none());
        assert_eq!(
            inspection_contribution(InspectionRecency::Days(91))
                .expect("band")
                .weight,
            20
        );
        assert_eq!(
            inspection_contribution(InspectionRecency::Days(180))
                .expect("band")
                .weight,
            20
        );
        assert_eq!(
            inspection_contribution(InspectionRecency::Days(181))
                .expect("band")
                .weight,
            35
        );
    }

    #[test]
    fn never_inspected_takes_the_most_severe_band() {
        let factor = inspection_contribution(InspectionRecency::Never).expect("band");
        assert_eq!(factor.weight, 35);
        assert_eq!(factor.note, "Overdue for inspection (>6 months)");
    }

    #[test]
    fn status_matching_ignores_case_and_padding() {
        for status in ["faulty", "FAULTY", "Faulty", "  Worn  ", "damaged"] {
            assert_eq!(
                status_contribution(status).expect("flagged").weight,
                STATUS_WEIGHT,
                "status {status:?} should contribute"
            );
        }
        assert!(status_contribution("operational").is_none());
        assert!(status_contribution("new").is_none());
    }
}
