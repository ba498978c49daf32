use crate::DateKey;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeSet;

/// A month laid out the way a date picker shows it: Monday-first weeks,
/// padded with `None` outside the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub first: NaiveDate,
    pub weeks: Vec<[Option<NaiveDate>; 7]>,
    /// Days of this month that already have a stored draft.
    pub drafted: BTreeSet<NaiveDate>,
}

impl CalendarMonth {
    /// Lays out the month containing `day`, marking days found in `drafted`.
    pub fn new(day: NaiveDate, drafted: &[DateKey]) -> Option<Self> {
        let first = day.with_day(1)?;
        let last = last_day_of_month(first)?;
        let days = get_dates_in_range(first, last);

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        for d in days {
            let col = d.weekday().num_days_from_monday() as usize;
            week[col] = Some(d);
            if col == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }

        let drafted = drafted
            .iter()
            .map(DateKey::date)
            .filter(|d| d.year() == first.year() && d.month() == first.month())
            .collect();

        Some(Self {
            first,
            weeks,
            drafted,
        })
    }

    pub fn has_draft(&self, day: NaiveDate) -> bool {
        self.drafted.contains(&day)
    }
}

/// Generates the dates from `start` to `end`, both inclusive.
/// If `start` is after `end`, the result is empty.
pub fn get_dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    Some(NaiveDate::from_ymd_opt(y, m, 1)? - Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn range_is_inclusive() {
        let dates = get_dates_in_range(d(2025, 8, 15), d(2025, 8, 17));
        assert_eq!(dates, vec![d(2025, 8, 15), d(2025, 8, 16), d(2025, 8, 17)]);
        assert!(get_dates_in_range(d(2025, 8, 17), d(2025, 8, 15)).is_empty());
    }

    #[test]
    fn march_2024_layout() {
        // 2024-03-01 is a Friday; 31 days end on a Sunday.
        let m = CalendarMonth::new(d(2024, 3, 15), &[]).unwrap();
        assert_eq!(m.first, d(2024, 3, 1));
        assert_eq!(m.weeks.len(), 5);
        assert!(m.weeks[0][..4].iter().all(Option::is_none));
        assert_eq!(m.weeks[0][4], Some(d(2024, 3, 1)));
        assert_eq!(m.weeks[4][6], Some(d(2024, 3, 31)));
    }

    #[test]
    fn december_rolls_into_next_year() {
        let m = CalendarMonth::new(d(2024, 12, 2), &[]).unwrap();
        let last = m.weeks.last().unwrap().iter().flatten().last().copied();
        assert_eq!(last, Some(d(2024, 12, 31)));
    }

    #[test]
    fn only_this_months_drafts_are_marked() {
        let keys = [
            DateKey::from_date(d(2024, 3, 15)).unwrap(),
            DateKey::from_date(d(2024, 4, 1)).unwrap(),
            DateKey::from_date(d(2023, 3, 15)).unwrap(),
        ];
        let m = CalendarMonth::new(d(2024, 3, 1), &keys).unwrap();
        assert!(m.has_draft(d(2024, 3, 15)));
        assert_eq!(m.drafted.len(), 1);
    }
}
