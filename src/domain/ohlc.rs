//! OHLC bar representation.

use crate::domain::error::DeepcountError;
use chrono::NaiveDate;

/// One observed price bar. Immutable once constructed; a later bar supersedes
/// it rather than mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl PriceBar {
    /// Reject NaN or infinite price fields and negative volume.
    pub fn validate(&self) -> Result<(), DeepcountError> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() {
                return Err(DeepcountError::InvalidBar {
                    symbol: self.symbol.clone(),
                    date: self.date,
                    reason: format!("non-finite {} value {}", field, value),
                });
            }
        }
        if self.volume < 0 {
            return Err(DeepcountError::InvalidBar {
                symbol: self.symbol.clone(),
                date: self.date,
                reason: format!("negative volume {}", self.volume),
            });
        }
        Ok(())
    }
}
