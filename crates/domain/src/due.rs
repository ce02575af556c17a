use chrono::NaiveDate;

/// How close an occurrence is to `today`. Only `Today` and `Tomorrow` are
/// notified, anything else is left for a later run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueWindow {
    Today,
    Tomorrow,
    NotDue,
}

impl DueWindow {
    pub fn classify(occurrence: NaiveDate, today: NaiveDate) -> Self {
        if occurrence == today {
            Self::Today
        } else if today.succ_opt() == Some(occurrence) {
            Self::Tomorrow
        } else {
            Self::NotDue
        }
    }

    pub fn is_due(&self) -> bool {
        !matches!(self, Self::NotDue)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classifies_relative_to_today() {
        let today = date(2024, 2, 28);
        assert_eq!(DueWindow::classify(date(2024, 2, 28), today), DueWindow::Today);
        assert_eq!(
            DueWindow::classify(date(2024, 2, 29), today),
            DueWindow::Tomorrow
        );
        assert_eq!(DueWindow::classify(date(2024, 3, 1), today), DueWindow::NotDue);
        assert_eq!(
            DueWindow::classify(date(2024, 2, 27), today),
            DueWindow::NotDue
        );
    }

    #[test]
    fn tomorrow_crosses_year_boundary() {
        assert_eq!(
            DueWindow::classify(date(2025, 1, 1), date(2024, 12, 31)),
            DueWindow::Tomorrow
        );
    }

    #[test]
    fn only_today_and_tomorrow_are_due() {
        assert!(DueWindow::Today.is_due());
        assert!(DueWindow::Tomorrow.is_due());
        assert!(!DueWindow::NotDue.is_due());
    }
}
