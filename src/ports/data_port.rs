//! Data access port trait.

use crate::domain::error::DeepcountError;
use crate::domain::ohlc::PriceBar;
use chrono::NaiveDate;

/// Supplies chronologically ordered bars for a contract symbol. Implementors
/// must return bars sorted by date with no duplicate dates.
pub trait DataPort {
    fn fetch_bars(
        &self,
        symbol: &str,
        exchange: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, DeepcountError>;

    /// (first date, last date, bar count) for a symbol, or `None` if the
    /// symbol has no data at all.
    fn data_range(
        &self,
        symbol: &str,
        exchange: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, DeepcountError>;
}
