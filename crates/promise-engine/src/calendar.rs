//! Weekend-aware bank holiday calendar.
//!
//! Holidays are defined as recurring day/month rules (Christmas Day, Boxing
//! Day, New Year's Day) and materialized on demand for the year window
//! around a queried date. A holiday landing on a weekend is relocated
//! forward to the next weekday not already claimed by another holiday.
//!
//! The concrete set is derived fresh for every query and the year window is
//! anchored to the queried date's own month, so two nearby dates can resolve
//! against different windows. [`bank_holidays_for`] exposes the derived set
//! directly for display and diagnostics.

use chrono::{Datelike, NaiveDate, Weekday};

/// A recurring annual holiday rule, identified by day and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayRule {
    /// Day of month (1-31).
    pub day: u32,
    /// Month of year (1-12).
    pub month: u32,
}

/// The observed holiday rules: Christmas Day, Boxing Day, New Year's Day.
pub const BANK_HOLIDAY_RULES: [HolidayRule; 3] = [
    HolidayRule { day: 25, month: 12 },
    HolidayRule { day: 26, month: 12 },
    HolidayRule { day: 1, month: 1 },
];

/// Whether a date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

// ── Holiday set derivation ──────────────────────────────────────────────────

/// The concrete bank holiday dates for the year window anchored at `query`.
///
/// Each rule is materialized for the query's year when the query month is at
/// or before the rule's month, and for the following year otherwise. The raw
/// dates are sorted ascending, then pushed off weekends in turn: a holiday on
/// Saturday or Sunday moves forward one day at a time, also stepping over any
/// date already claimed by another holiday in the set. Entries keep the
/// position of the raw date they were derived from, so the returned list is
/// not necessarily sorted after relocation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use promise_engine::calendar::bank_holidays_for;
///
/// // Christmas and Boxing Day 2021 fall on a weekend and move to Monday the
/// // 27th and Tuesday the 28th; New Year's Day 2022, a Saturday, moves to
/// // Monday January 3rd.
/// let query = NaiveDate::from_ymd_opt(2021, 12, 23).unwrap();
/// let holidays = bank_holidays_for(query);
/// assert_eq!(
///     holidays,
///     vec![
///         NaiveDate::from_ymd_opt(2021, 12, 27).unwrap(),
///         NaiveDate::from_ymd_opt(2021, 12, 28).unwrap(),
///         NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
///     ],
/// );
/// ```
pub fn bank_holidays_for(query: NaiveDate) -> Vec<NaiveDate> {
    let mut holidays: Vec<NaiveDate> = BANK_HOLIDAY_RULES
        .iter()
        .filter_map(|&rule| anchored_to(rule, query))
        .collect();
    holidays.sort_unstable();

    for i in 0..holidays.len() {
        if let Some(moved) = shifted_off_weekend(holidays[i], &holidays) {
            holidays[i] = moved;
        }
    }
    holidays
}

/// Whether `date` is a bank holiday, after weekend relocation.
///
/// The holiday set is derived from the rules on every call, anchored at
/// `date` itself. Around a year boundary this matters: a raw New Year's Day
/// that relocates forward is observed on its relocated date, not on
/// January 1st.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use promise_engine::calendar::is_bank_holiday;
///
/// // Christmas 2025 falls on a Thursday and stays put.
/// assert!(is_bank_holiday(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
/// // Christmas 2021 falls on a Saturday; the observed holiday is Monday the 27th.
/// assert!(!is_bank_holiday(NaiveDate::from_ymd_opt(2021, 12, 25).unwrap()));
/// assert!(is_bank_holiday(NaiveDate::from_ymd_opt(2021, 12, 27).unwrap()));
/// ```
pub fn is_bank_holiday(date: NaiveDate) -> bool {
    bank_holidays_for(date).contains(&date)
}

/// Materialize a rule relative to `query`: rule months at or after the query
/// month stay in the query's year, earlier months roll into the next year.
fn anchored_to(rule: HolidayRule, query: NaiveDate) -> Option<NaiveDate> {
    let year = if query.month() <= rule.month {
        query.year()
    } else {
        query.year() + 1
    };
    NaiveDate::from_ymd_opt(year, rule.month, rule.day)
}

/// Move `start` forward past weekends, skipping dates already in `claimed`.
fn shifted_off_weekend(start: NaiveDate, claimed: &[NaiveDate]) -> Option<NaiveDate> {
    let mut date = start;
    while is_weekend(date) {
        date = date.succ_opt()?;
        while claimed.contains(&date) {
            date = date.succ_opt()?;
        }
    }
    Some(date)
}

// ── Tests ───────────────────────────────────────────────────────────────────
