//! Expiry calendar
//!
//! Date plumbing for the vendor's DD-MM-YYYY expiry convention: parsing,
//! time-to-expiry, the monthly last-Thursday expiry, and the probe list the
//! fetch layer walks when the default expiry has no records.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Floor for time-to-expiry in years, so same-day chains stay solvable
pub const MIN_TIME_TO_EXPIRY: f64 = 1e-4;

/// Parse a vendor expiry date (DD-MM-YYYY)
pub fn parse_expiry(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%d-%m-%Y").ok()
}

/// Format a date in the vendor's DD-MM-YYYY convention
pub fn format_expiry(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Time to expiry in years (365.25-day year), floored at
/// [`MIN_TIME_TO_EXPIRY`] for same-day or already-past expiries.
pub fn time_to_expiry(expiry: NaiveDate, now: DateTime<Utc>) -> f64 {
    let expiry_dt = expiry.and_hms_opt(0, 0, 0).unwrap().and_utc();
    let days = (expiry_dt - now).num_seconds() as f64 / 86_400.0;

    if days <= 0.0 {
        return MIN_TIME_TO_EXPIRY;
    }

    days / 365.25
}

/// Last Thursday of the month following `today` - the monthly index expiry
pub fn next_monthly_expiry(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };

    last_thursday(year, month)
}

/// Last Thursday of a given month
fn last_thursday(year: i32, month: u32) -> NaiveDate {
    let mut day = last_day_of_month(year, month);
    // Thursday is 3 in Monday-based indexing
    while day.weekday().num_days_from_monday() != 3 {
        day -= Duration::days(1);
    }
    day
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap() - Duration::days(1)
}

/// Candidate expiry dates to probe when the default expiry returns an empty
/// chain, in decreasing order of likelihood:
///
/// 1. Weekly steps out to six weeks (covers non-Thursday expiry schedules)
/// 2. The next five Thursdays (weekly index expiries)
/// 3. Month-end clusters for the current and following month
///
/// De-duplicated, order preserved. The fetch layer owns actually trying them.
pub fn candidate_expiries(today: NaiveDate) -> Vec<NaiveDate> {
    let mut candidates: Vec<NaiveDate> = Vec::new();
    let mut push = |date: NaiveDate| {
        if !candidates.contains(&date) {
            candidates.push(date);
        }
    };

    for days_ahead in [7, 14, 21, 28, 35, 42] {
        push(today + Duration::days(days_ahead));
    }

    for weeks in 0..5 {
        let base = today + Duration::weeks(weeks);
        let weekday = base.weekday().num_days_from_monday() as i64;
        let mut days_to_thursday = (3 - weekday).rem_euclid(7);
        if days_to_thursday == 0 && weekday != 3 {
            days_to_thursday = 7;
        }
        push(base + Duration::days(days_to_thursday));
    }

    for months_ahead in 0..=1 {
        let mut year = today.year();
        let mut month = today.month();
        for _ in 0..months_ahead {
            if month == 12 {
                year += 1;
                month = 1;
            } else {
                month += 1;
            }
        }
        let month_end = last_day_of_month(year, month);
        for days_back in 0..7 {
            push(month_end - Duration::days(days_back));
        }
    }

    candidates
}
