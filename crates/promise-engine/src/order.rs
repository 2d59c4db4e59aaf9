//! Order input parsing and validation.
//!
//! Converts the four raw text fields of an order (order datetime, lead time,
//! dispatch cut-off, working-day-only flag) into a typed [`OrderRequest`].
//! Parsing is strict: no trimming, no coercion of unrecognized boolean
//! spellings, and the lead time must fit a 32-bit signed integer before the
//! non-negative check applies.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{PromiseError, Result};

/// Format of the order datetime field (e.g. `"07/09/2022 13:00:00"`).
/// Parsing also accepts a single-digit day, as in `"7/09/2022 13:00:00"`.
pub const ORDER_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Format of the dispatch cut-off field (e.g. `"12:00:00"`).
pub const CUT_OFF_FORMAT: &str = "%H:%M:%S";

/// A validated order, ready for delivery date resolution.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Calendar date the order was placed.
    pub order_date: NaiveDate,
    /// Wall-clock time the order was placed.
    pub order_time: NaiveTime,
    /// Lead time in whole days.
    pub lead_time_days: u32,
    /// Daily dispatch cut-off. Orders at or after this time miss the day's
    /// dispatch.
    pub dispatch_cut_off: NaiveTime,
    /// When set, delivery may only happen on a working day.
    pub working_day_only: bool,
}

/// Parse the four raw order fields into an [`OrderRequest`].
///
/// # Arguments
///
/// * `order_date` - Order date and time, `"D/MM/YYYY HH:mm:ss"` (the day may
///   omit its leading zero)
/// * `lead_time` - Lead time in days, base-10 integer text
/// * `dispatch_cut_off` - Daily dispatch cut-off, `"HH:mm:ss"`
/// * `working_day_only` - `"true"` or `"false"`, case-insensitive
///
/// # Errors
///
/// Returns [`PromiseError::InvalidOrderDate`] if the datetime does not parse,
/// [`PromiseError::InvalidLeadTime`] for non-integer or negative lead times,
/// [`PromiseError::InvalidCutOff`] if the cut-off does not parse, and
/// [`PromiseError::InvalidWorkingDayFlag`] for unrecognized boolean text.
///
/// # Examples
///
/// ```
/// use promise_engine::order::parse_order;
///
/// let request = parse_order("07/09/2022 13:00:00", "17", "12:00:00", "false").unwrap();
/// assert_eq!(request.lead_time_days, 17);
/// assert!(!request.working_day_only);
/// ```
pub fn parse_order(
    order_date: &str,
    lead_time: &str,
    dispatch_cut_off: &str,
    working_day_only: &str,
) -> Result<OrderRequest> {
    let placed = NaiveDateTime::parse_from_str(order_date, ORDER_DATETIME_FORMAT)
        .map_err(|e| PromiseError::InvalidOrderDate(format!("'{}': {}", order_date, e)))?;
    let lead_time_days = parse_lead_time(lead_time)?;
    let dispatch_cut_off = NaiveTime::parse_from_str(dispatch_cut_off, CUT_OFF_FORMAT)
        .map_err(|e| PromiseError::InvalidCutOff(format!("'{}': {}", dispatch_cut_off, e)))?;
    let working_day_only = parse_working_day_flag(working_day_only)?;

    Ok(OrderRequest {
        order_date: placed.date(),
        order_time: placed.time(),
        lead_time_days,
        dispatch_cut_off,
        working_day_only,
    })
}

/// Parse a lead time with 32-bit signed integer semantics, rejecting negatives.
fn parse_lead_time(s: &str) -> Result<u32> {
    let days = s
        .parse::<i32>()
        .map_err(|e| PromiseError::InvalidLeadTime(format!("'{}': {}", s, e)))?;
    if days < 0 {
        return Err(PromiseError::InvalidLeadTime(format!(
            "'{s}': lead time cannot be negative"
        )));
    }
    Ok(days as u32)
}

/// Parse the working-day-only flag. Only "true" and "false" (any casing) are
/// accepted.
fn parse_working_day_flag(s: &str) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(PromiseError::InvalidWorkingDayFlag(format!("'{s}'"))),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_order() {
        let request = parse_order("07/09/2022 13:00:00", "17", "12:00:00", "false").unwrap();
        assert_eq!(request.order_date, NaiveDate::from_ymd_opt(2022, 9, 7).unwrap());
        assert_eq!(request.order_time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert_eq!(request.lead_time_days, 17);
        assert_eq!(request.dispatch_cut_off, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert!(!request.working_day_only);
    }

    #[test]
    fn test_parse_single_digit_day() {
        let request = parse_order("7/09/2022 13:00:00", "17", "12:00:00", "false").unwrap();
        assert_eq!(request.order_date, NaiveDate::from_ymd_opt(2022, 9, 7).unwrap());
    }

    #[test]
    fn test_parse_garbage_datetime_rejected() {
        let result = parse_order("Order Date", "17", "12:00:00", "false");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid order date"), "got: {err}");
    }

    #[test]
    fn test_parse_impossible_date_rejected() {
        let result = parse_order("31/02/2022 10:00:00", "1", "12:00:00", "false");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_hour_out_of_range_rejected() {
        let result = parse_order("12/09/2022 25:00:00", "1", "12:00:00", "false");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_datetime_with_trailing_space_rejected() {
        let result = parse_order("12/09/2022 10:00:00 ", "1", "12:00:00", "false");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_non_integer_lead_time_rejected() {
        let result = parse_order("12/09/2022 10:00:00", "seventeen", "12:00:00", "false");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid lead time"), "got: {err}");
    }

    #[test]
    fn test_parse_negative_lead_time_rejected() {
        let result = parse_order("12/09/2022 10:00:00", "-2", "12:00:00", "false");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("negative"), "got: {err}");
    }

    #[test]
    fn test_parse_zero_lead_time() {
        let request = parse_order("12/09/2022 10:00:00", "0", "12:00:00", "false").unwrap();
        assert_eq!(request.lead_time_days, 0);
    }

    #[test]
    fn test_parse_lead_time_with_plus_sign() {
        let request = parse_order("12/09/2022 10:00:00", "+17", "12:00:00", "false").unwrap();
        assert_eq!(request.lead_time_days, 17);
    }

    #[test]
    fn test_parse_lead_time_with_whitespace_rejected() {
        let result = parse_order("12/09/2022 10:00:00", " 17", "12:00:00", "false");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_lead_time_overflow_rejected() {
        // One past i32::MAX
        let result = parse_order("12/09/2022 10:00:00", "2147483648", "12:00:00", "false");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid lead time"), "got: {err}");
    }

    #[test]
    fn test_parse_flag_case_insensitive() {
        let on = parse_order("12/09/2022 10:00:00", "1", "12:00:00", "True").unwrap();
        assert!(on.working_day_only);
        let off = parse_order("12/09/2022 10:00:00", "1", "12:00:00", "FALSE").unwrap();
        assert!(!off.working_day_only);
    }

    #[test]
    fn test_parse_flag_unrecognized_rejected() {
        for flag in ["yes", "no", "1", "0", ""] {
            let result = parse_order("12/09/2022 10:00:00", "1", "12:00:00", flag);
            assert!(result.is_err(), "flag '{flag}' should be rejected");
            let err = result.unwrap_err().to_string();
            assert!(err.contains("Invalid working day flag"), "got: {err}");
        }
    }

    #[test]
    fn test_parse_flag_with_whitespace_rejected() {
        let result = parse_order("12/09/2022 10:00:00", "1", "12:00:00", "true ");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_bad_cut_off_rejected() {
        for cut_off in ["12:00", "noon", "25:00:00", ""] {
            let result = parse_order("12/09/2022 10:00:00", "1", cut_off, "false");
            assert!(result.is_err(), "cut-off '{cut_off}' should be rejected");
        }
        let err = parse_order("12/09/2022 10:00:00", "1", "noon", "false")
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid cut-off time"), "got: {err}");
    }

    #[test]
    fn test_order_request_serializes() {
        let request = parse_order("07/09/2022 13:00:00", "17", "12:00:00", "true").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["order_date"], "2022-09-07");
        assert_eq!(json["order_time"], "13:00:00");
        assert_eq!(json["lead_time_days"], 17);
        assert_eq!(json["working_day_only"], true);
    }
}
