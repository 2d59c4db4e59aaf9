//! Delivery date resolution.
//!
//! Applies the dispatch cut-off rule to an order, adds the lead time as
//! calendar days, and walks the candidate date forward until it lands on a
//! deliverable day: never a bank holiday, and never a weekend when the order
//! is restricted to working-day delivery.
//!
//! Two surfaces are provided. [`calculate_delivery_date`] is the raw text
//! boundary: four strings in, a formatted date or the literal
//! `"Invalid Data"` out. [`delivery_date`] and [`estimate_delivery`] are the
//! typed equivalents for callers that already hold an [`OrderRequest`].

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::calendar::{is_bank_holiday, is_weekend};
use crate::error::{PromiseError, Result};
use crate::order::{parse_order, OrderRequest};

/// Returned by [`calculate_delivery_date`] for any input that fails validation.
pub const INVALID_DATA: &str = "Invalid Data";

/// Format of delivery dates at the text boundary (e.g. `"25/09/2022"`).
pub const DELIVERY_DATE_FORMAT: &str = "%d/%m/%Y";

// ── Text boundary ───────────────────────────────────────────────────────────

/// Compute the expected delivery date from raw order fields.
///
/// The whole pipeline behind a single text boundary: parse and validate,
/// apply the cut-off rule, add the lead time, then move past holidays (and
/// weekends, for working-day-only orders). Every failure collapses to the
/// literal `"Invalid Data"`; use [`estimate_delivery`] for typed errors and
/// metadata.
///
/// # Arguments
///
/// * `order_date` - Order date and time, `"D/MM/YYYY HH:mm:ss"`
/// * `lead_time` - Lead time in days, base-10 integer text
/// * `dispatch_cut_off` - Daily dispatch cut-off, `"HH:mm:ss"`
/// * `working_day_only` - `"true"` or `"false"`, case-insensitive
///
/// # Examples
///
/// ```
/// use promise_engine::calculate_delivery_date;
///
/// let due = calculate_delivery_date("07/09/2022 13:00:00", "17", "12:00:00", "false");
/// assert_eq!(due, "25/09/2022");
///
/// let bad = calculate_delivery_date("07/09/2022 13:00:00", "-2", "12:00:00", "false");
/// assert_eq!(bad, "Invalid Data");
/// ```
pub fn calculate_delivery_date(
    order_date: &str,
    lead_time: &str,
    dispatch_cut_off: &str,
    working_day_only: &str,
) -> String {
    parse_order(order_date, lead_time, dispatch_cut_off, working_day_only)
        .and_then(|request| delivery_date(&request))
        .map(|date| date.format(DELIVERY_DATE_FORMAT).to_string())
        .unwrap_or_else(|_| INVALID_DATA.to_string())
}

// ── Typed resolution ────────────────────────────────────────────────────────

/// A delivery estimate together with the intermediate findings behind it.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryEstimate {
    /// The delivery date in the text boundary format (e.g. `"29/12/2021"`).
    pub delivery_date: String,
    /// The same date in ISO 8601 (e.g. `"2021-12-29"`).
    pub delivery_date_iso: String,
    /// Whether the order was placed at or after the dispatch cut-off.
    pub missed_cut_off: bool,
    /// Lead time actually applied, including the missed-cut-off day.
    pub effective_lead_time_days: u32,
    /// Days added on top of the lead time to clear weekends and holidays.
    pub calendar_shift_days: i64,
}

/// Resolve the delivery date for a validated order.
///
/// # Errors
///
/// Returns [`PromiseError::DateOutOfRange`] if the lead time pushes the date
/// past the end of the supported calendar range.
pub fn delivery_date(request: &OrderRequest) -> Result<NaiveDate> {
    let candidate = raw_delivery_date(request)?;
    first_deliverable_on_or_after(candidate, request.working_day_only)
}

/// Resolve a delivery date together with the metadata behind it.
///
/// # Errors
///
/// Returns [`PromiseError::DateOutOfRange`] if the lead time pushes the date
/// past the end of the supported calendar range.
///
/// # Examples
///
/// ```
/// use promise_engine::{estimate_delivery, parse_order};
///
/// let request = parse_order("23/12/2021 11:00:00", "2", "12:00:00", "true").unwrap();
/// let estimate = estimate_delivery(&request).unwrap();
/// assert_eq!(estimate.delivery_date, "29/12/2021");
/// assert_eq!(estimate.delivery_date_iso, "2021-12-29");
/// assert!(!estimate.missed_cut_off);
/// assert_eq!(estimate.effective_lead_time_days, 2);
/// assert_eq!(estimate.calendar_shift_days, 4);
/// ```
pub fn estimate_delivery(request: &OrderRequest) -> Result<DeliveryEstimate> {
    let candidate = raw_delivery_date(request)?;
    let delivered = first_deliverable_on_or_after(candidate, request.working_day_only)?;

    Ok(DeliveryEstimate {
        delivery_date: delivered.format(DELIVERY_DATE_FORMAT).to_string(),
        delivery_date_iso: delivered.format("%Y-%m-%d").to_string(),
        missed_cut_off: missed_cut_off(request),
        effective_lead_time_days: effective_lead_time_days(request),
        calendar_shift_days: (delivered - candidate).num_days(),
    })
}

/// Walk forward from `candidate` to the first deliverable date.
///
/// Bank holidays never accept deliveries. Weekends are blocked only when
/// `working_day_only` is set. The holiday test re-derives its calendar from
/// each candidate in turn (see [`crate::calendar::is_bank_holiday`]).
///
/// # Errors
///
/// Returns [`PromiseError::DateOutOfRange`] if the walk steps past the end of
/// the supported calendar range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use promise_engine::first_deliverable_on_or_after;
///
/// // A Sunday is fine for an unrestricted order; a working-day-only order
/// // slips to Monday.
/// let sunday = NaiveDate::from_ymd_opt(2022, 9, 25).unwrap();
/// assert_eq!(first_deliverable_on_or_after(sunday, false).unwrap(), sunday);
/// assert_eq!(
///     first_deliverable_on_or_after(sunday, true).unwrap(),
///     NaiveDate::from_ymd_opt(2022, 9, 26).unwrap(),
/// );
/// ```
pub fn first_deliverable_on_or_after(
    candidate: NaiveDate,
    working_day_only: bool,
) -> Result<NaiveDate> {
    let mut date = candidate;
    while blocked(date, working_day_only) {
        date = date.succ_opt().ok_or_else(|| {
            PromiseError::DateOutOfRange(format!("no deliverable day after {date}"))
        })?;
    }
    Ok(date)
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Whether `date` cannot accept this delivery.
fn blocked(date: NaiveDate, working_day_only: bool) -> bool {
    (working_day_only && is_weekend(date)) || is_bank_holiday(date)
}

/// Whether the order was placed at or after the dispatch cut-off. Equality
/// counts as missed: an order at exactly the cut-off second does not make the
/// day's dispatch.
fn missed_cut_off(request: &OrderRequest) -> bool {
    request.order_time >= request.dispatch_cut_off
}

/// The lead time actually applied, including the missed-cut-off day.
fn effective_lead_time_days(request: &OrderRequest) -> u32 {
    if missed_cut_off(request) {
        request.lead_time_days + 1
    } else {
        request.lead_time_days
    }
}

/// The candidate date before holiday and weekend adjustment.
fn raw_delivery_date(request: &OrderRequest) -> Result<NaiveDate> {
    let lead = i64::from(effective_lead_time_days(request));
    request
        .order_date
        .checked_add_signed(Duration::days(lead))
        .ok_or_else(|| {
            PromiseError::DateOutOfRange(format!(
                "{} plus {} days overflows the calendar",
                request.order_date, lead
            ))
        })
}

// ── Tests ───────────────────────────────────────────────────────────────────
