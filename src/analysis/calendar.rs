use super::domain::InspectionRecency;
use super::AnalysisError;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whole months as floor(elapsed days / 30). This mirrors the service-life
/// tables the weights were calibrated against; it is not calendar-accurate.
pub(crate) fn age_in_months(date_of_supply: &str, today: NaiveDate) -> Result<i64, AnalysisError> {
    let supplied = parse_iso_date(date_of_supply)?;
    Ok((today - supplied).num_days().div_euclid(30))
}

/// Days since the most recent inspection; `Never` when the record carries no
/// inspection history at all.
pub(crate) fn inspection_recency(
    dates: &[String],
    today: NaiveDate,
) -> Result<InspectionRecency, AnalysisError> {
    let mut latest: Option<NaiveDate> = None;
    for raw in dates {
        let date = parse_iso_date(raw)?;
        latest = Some(match latest {
            Some(seen) if seen >= date => seen,
            _ => date,
        });
    }

    Ok(match latest {
        Some(date) => InspectionRecency::Days((today - date).num_days()),
        None => InspectionRecency::Never,
    })
}

fn parse_iso_date(raw: &str) -> Result<NaiveDate, AnalysisError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| AnalysisError::MalformedDate {
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn age_floors_partial_months() {
        let today = day(2025, 6, 15);
        // 59 elapsed days is still one whole 30-day month.
        assert_eq!(age_in_months("2025-04-17", today).expect("parses"), 1);
        assert_eq!(age_in_months("2025-04-16", today).expect("parses"), 2);
    }

    #[test]
    fn age_of_a_future_supply_date_floors_negative() {
        let today = day(2025, 6, 15);
        assert_eq!(age_in_months("2025-06-16", today).expect("parses"), -1);
    }

    #[test]
    fn age_rejects_malformed_date() {
        let today = day(2025, 6, 15);
        match age_in_months("15/06/2024", today) {
            Err(AnalysisError::MalformedDate { value }) => assert_eq!(value, "15/06/2024"),
            other => panic!("expected malformed date error, got {other:?}"),
        }
    }

    #[test]
    fn recency_picks_the_most_recent_inspection() {
        let today = day(2025, 6, 15);
        let dates = vec![
            "2024-11-02".to_string(),
            "2025-06-05".to_string(),
            "2025-01-20".to_string(),
        ];
        assert_eq!(
            inspection_recency(&dates, today).expect("parses"),
            InspectionRecency::Days(10)
        );
    }

    #[test]
    fn recency_of_an_empty_history_is_never() {
        let today = day(2025, 6, 15);
        assert_eq!(
            inspection_recency(&[], today).expect("no dates to parse"),
            InspectionRecency::Never
        );
    }

    #[test]
    fn recency_rejects_a_malformed_entry_even_when_others_parse() {
        let today = day(2025, 6, 15);
        let dates = vec!["2025-06-05".to_string(), "June 5th".to_string()];
        assert!(matches!(
            inspection_recency(&dates, today),
            Err(AnalysisError::MalformedDate { .. })
        ));
    }
}
