use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::keywords::{Keyword, Keywords};

/// Default accepted input date formats (parsing only).
pub const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Configuration options for [`resolve_date_token`].
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions<'a> {
    /// The date to use as "today" for relative keywords.
    pub reference_date: Option<NaiveDate>,
    /// A slice of `chrono` format strings to try for parsing dates.
    pub formats: Option<&'a [&'a str]>,
}

/// Resolves a user-typed token into a calendar day.
///
/// Resolution order:
///
/// 1. Relative keywords (case-insensitive, synonyms included), anchored on
///    `reference_date`: `today`, `yesterday`, `tomorrow`.
/// 2. Weekday names: the most recent such day, today included.
/// 3. Formatted dates, trying each of `formats` in order.
///
/// Returns `None` when nothing matches.
pub fn resolve_date_token(token: &str, options: Option<ParseOptions>) -> Option<NaiveDate> {
    let options = options.unwrap_or_default();
    let reference_date = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let formats = options.formats.unwrap_or(DEFAULT_FORMATS);
    let token = token.trim();

    match Keywords::lookup(token) {
        Some(Keyword::Today) => return Some(reference_date),
        Some(Keyword::Yesterday) => return Some(reference_date - Duration::days(1)),
        Some(Keyword::Tomorrow) => return Some(reference_date + Duration::days(1)),
        Some(day) => {
            let weekday = weekday_of(day)?;
            let days_ago = (reference_date.weekday().num_days_from_monday() + 7
                - weekday.num_days_from_monday())
                % 7;
            return Some(reference_date - Duration::days(days_ago as i64));
        }
        None => {}
    }

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

/// Parses a `YYYY-MM` month token into its first day.
pub fn resolve_month_token(token: &str) -> Option<NaiveDate> {
    let (year, month) = token.trim().split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

fn weekday_of(keyword: Keyword) -> Option<Weekday> {
    match keyword {
        Keyword::Monday => Some(Weekday::Mon),
        Keyword::Tuesday => Some(Weekday::Tue),
        Keyword::Wednesday => Some(Weekday::Wed),
        Keyword::Thursday => Some(Weekday::Thu),
        Keyword::Friday => Some(Weekday::Fri),
        Keyword::Saturday => Some(Weekday::Sat),
        Keyword::Sunday => Some(Weekday::Sun),
        Keyword::Today | Keyword::Yesterday | Keyword::Tomorrow => None,
    }
}
