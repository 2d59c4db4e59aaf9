//! # promise-engine
//!
//! Deterministic delivery date calculation for e-commerce orders.
//!
//! Given when an order was placed, a lead time in days, a daily dispatch
//! cut-off and whether delivery is restricted to working days, the engine
//! produces the expected delivery date: orders placed at or after the
//! cut-off lose a day, the lead time is added as plain calendar days, and
//! the result is walked forward past bank holidays (and weekends, when
//! restricted). All functions take explicit inputs (no system clock access),
//! so the same inputs always produce the same date.
//!
//! ## Modules
//!
//! - [`order`]: raw order field parsing and validation into [`OrderRequest`]
//! - [`calendar`]: weekend detection and the weekend-relocated bank holiday set
//! - [`dispatch`]: cut-off handling, lead time arithmetic and the delivery date walk
//! - [`error`]: error types

pub mod calendar;
pub mod dispatch;
pub mod error;
pub mod order;

pub use calendar::{
    bank_holidays_for, is_bank_holiday, is_weekend, HolidayRule, BANK_HOLIDAY_RULES,
};
pub use dispatch::{
    calculate_delivery_date, delivery_date, estimate_delivery, first_deliverable_on_or_after,
    DeliveryEstimate, DELIVERY_DATE_FORMAT, INVALID_DATA,
};
pub use error::PromiseError;
pub use order::{parse_order, OrderRequest, CUT_OFF_FORMAT, ORDER_DATETIME_FORMAT};
