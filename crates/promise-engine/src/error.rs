//! Error types for promise-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromiseError {
    #[error("Invalid order date: {0}")]
    InvalidOrderDate(String),

    #[error("Invalid lead time: {0}")]
    InvalidLeadTime(String),

    #[error("Invalid cut-off time: {0}")]
    InvalidCutOff(String),

    #[error("Invalid working day flag: {0}")]
    InvalidWorkingDayFlag(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, PromiseError>;
