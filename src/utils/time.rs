use chrono::{Datelike, Duration, NaiveDate};

/// Today's date as the backend expects it (YYYY-MM-DD), from the
/// browser clock.
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// The Monday-first week containing `date`, as (weekday label, ISO date)
/// pairs. Drives the weekly menu strip.
pub fn week_of(date: NaiveDate) -> Vec<(&'static str, String)> {
    const LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    LABELS
        .iter()
        .enumerate()
        .map(|(offset, label)| {
            let day = monday + Duration::days(offset as i64);
            (*label, day.format("%Y-%m-%d").to_string())
        })
        .collect()
}

pub fn parse_iso(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Calendar layout for the month containing `date`: the Sunday-first
/// weekday offset of the 1st, and the number of days in the month.
/// Drives the monthly plan grid.
pub fn month_grid(date: NaiveDate) -> (u32, u32) {
    let first = date.with_day(1).unwrap_or(date);
    (first.weekday().num_days_from_sunday(), days_in_month(date))
}

fn days_in_month(date: NaiveDate) -> u32 {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next_month
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_on_monday() {
        // 2026-08-31 is a Monday
        let week = week_of(NaiveDate::from_ymd_opt(2026, 8, 31).unwrap());
        assert_eq!(week[0], ("Mon", "2026-08-31".to_string()));
        assert_eq!(week[6], ("Sun", "2026-09-06".to_string()));
    }

    #[test]
    fn midweek_date_maps_into_same_week() {
        // Thursday of that week
        let week = week_of(NaiveDate::from_ymd_opt(2026, 9, 3).unwrap());
        assert_eq!(week[0].1, "2026-08-31");
        assert_eq!(week[3].1, "2026-09-03");
    }

    #[test]
    fn month_grid_offsets_from_sunday() {
        // September 2026 starts on a Tuesday
        assert_eq!(
            month_grid(NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()),
            (2, 30)
        );
        // leap February
        assert_eq!(
            month_grid(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()),
            (4, 29)
        );
    }

    #[test]
    fn december_rolls_into_the_next_year() {
        let (_, days) = month_grid(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap());
        assert_eq!(days, 31);
    }

    #[test]
    fn parses_backend_dates() {
        assert!(parse_iso("2026-08-31").is_some());
        assert!(parse_iso("31/08/2026").is_none());
    }
}
