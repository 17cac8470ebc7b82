//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for deepcount.
#[derive(Debug, thiserror::Error)]
pub enum DeepcountError {
    /// A non-zero position paired with a same-sign pending order. This is a
    /// programming or data error upstream; it is never corrected silently.
    #[error("invalid agent state: position {position} with same-sign pending order {pending}")]
    InvalidState { position: i8, pending: i8 },

    #[error("invalid {field} value {value}: must be -1, 0 or 1")]
    InvalidUnit { field: &'static str, value: i8 },

    #[error("non-finite close at index {index}: {value}")]
    NonFiniteClose { index: usize, value: f64 },

    #[error("invalid bar for {symbol} on {date}: {reason}")]
    InvalidBar {
        symbol: String,
        date: NaiveDate,
        reason: String,
    },

    #[error("insufficient data for {symbol}: have {bars} bars, need {minimum}")]
    InsufficientData {
        symbol: String,
        bars: usize,
        minimum: usize,
    },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
