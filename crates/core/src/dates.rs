//! Date-range arithmetic for the range picker: quick presets, month/year
//! composition with correct end-of-month handling, and the export filename
//! date. All calendar math goes through `chrono`; no day-count tables.

use chrono::{Datelike, Months, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ISO_DATE: &str = "%Y-%m-%d";

/// A start/end pair in ISO `YYYY-MM-DD` form, ready for `ActiveFilters`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Fixed calendar-year preset: Jan 1 through Dec 31.
pub fn fixed_year(year: i32) -> DateRange {
    DateRange {
        start: format!("{year:04}-01-01"),
        end: format!("{year:04}-12-31"),
    }
}

/// Rolling preset: `months` calendar months back from `today` through today.
/// Day-of-month clamps when the source day does not exist in the target
/// month (e.g. May 31 minus 3 months is Feb 28/29).
pub fn last_months(months: u32, today: NaiveDate) -> DateRange {
    let start = today
        .checked_sub_months(Months::new(months))
        .unwrap_or(today);
    DateRange {
        start: start.format(ISO_DATE).to_string(),
        end: today.format(ISO_DATE).to_string(),
    }
}

/// First day of a month, for the start endpoint of a month/year pick.
pub fn first_of_month(year: i32, month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.format(ISO_DATE).to_string())
}

/// Last calendar day of a month, for the end endpoint. Leap years fall out
/// of the month arithmetic.
pub fn end_of_month(year: i32, month: u32) -> Option<String> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(last.format(ISO_DATE).to_string())
}

/// Year choices for the picker dropdowns: the current year and the four
/// before it, newest first.
pub fn year_options(today: NaiveDate) -> Vec<i32> {
    (0..5).map(|back| today.year() - back).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fixed_year_spans_january_through_december() {
        let range = fixed_year(2024);
        assert_eq!(range.start, "2024-01-01");
        assert_eq!(range.end, "2024-12-31");
    }

    #[test]
    fn rolling_months_subtract_calendar_months() {
        let range = last_months(3, date(2024, 6, 15));
        assert_eq!(range.start, "2024-03-15");
        assert_eq!(range.end, "2024-06-15");

        // Year boundary
        let range = last_months(12, date(2024, 2, 1));
        assert_eq!(range.start, "2023-02-01");
    }

    #[test]
    fn rolling_months_clamp_missing_days() {
        let range = last_months(1, date(2024, 3, 31));
        assert_eq!(range.start, "2024-02-29", "leap February clamps to 29");
    }

    #[test]
    fn end_of_month_handles_leap_years() {
        assert_eq!(end_of_month(2024, 2).unwrap(), "2024-02-29");
        assert_eq!(end_of_month(2023, 2).unwrap(), "2023-02-28");
        assert_eq!(end_of_month(2024, 12).unwrap(), "2024-12-31");
        assert_eq!(end_of_month(2024, 4).unwrap(), "2024-04-30");
        assert!(end_of_month(2024, 13).is_none());
    }

    #[test]
    fn first_of_month_pads_components() {
        assert_eq!(first_of_month(2024, 2).unwrap(), "2024-02-01");
    }

    #[test]
    fn year_options_count_back_from_today() {
        assert_eq!(year_options(date(2026, 8, 29)), vec![2026, 2025, 2024, 2023, 2022]);
    }
}
