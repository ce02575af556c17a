use chrono::prelude::*;

/// Occurrence dates travel as ISO-8601 strings at UTC midnight, in the same
/// shape `Date.prototype.toISOString` produces: `2024-03-10T00:00:00.000Z`
pub fn format_occurrence_iso(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

/// Long form used in notification bodies, e.g. `March 10, 2024`
pub fn format_human_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_like_javascript_iso_strings() {
        assert_eq!(
            format_occurrence_iso(date(2024, 3, 10)),
            "2024-03-10T00:00:00.000Z"
        );
        assert_eq!(
            format_occurrence_iso(date(2025, 12, 1)),
            "2025-12-01T00:00:00.000Z"
        );
    }

    #[test]
    fn formats_human_dates() {
        assert_eq!(format_human_date(date(2024, 3, 10)), "March 10, 2024");
        assert_eq!(format_human_date(date(2024, 11, 1)), "November 1, 2024");
    }
}
