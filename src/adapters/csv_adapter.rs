//! CSV file data adapter.
//!
//! One file per contract, named `{symbol}_{exchange}.csv`, with a header row
//! and `date,open,high,low,close,volume` columns.

use crate::domain::error::DeepcountError;
use crate::domain::ohlc::PriceBar;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str, exchange: &str) -> PathBuf {
        self.base_path.join(format!("{}_{}.csv", symbol, exchange))
    }

    fn field<'r>(
        record: &'r csv::StringRecord,
        index: usize,
        name: &str,
    ) -> Result<&'r str, DeepcountError> {
        record.get(index).ok_or_else(|| DeepcountError::Data {
            reason: format!("missing {} column", name),
        })
    }

    fn number<T: std::str::FromStr>(
        record: &csv::StringRecord,
        index: usize,
        name: &str,
    ) -> Result<T, DeepcountError>
    where
        T::Err: std::fmt::Display,
    {
        Self::field(record, index, name)?
            .parse()
            .map_err(|e| DeepcountError::Data {
                reason: format!("invalid {} value: {}", name, e),
            })
    }
}

impl DataPort for CsvAdapter {
    fn fetch_bars(
        &self,
        symbol: &str,
        exchange: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, DeepcountError> {
        let path = self.csv_path(symbol, exchange);
        let content = fs::read_to_string(&path).map_err(|e| DeepcountError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| DeepcountError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = Self::field(&record, 0, "date")?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                DeepcountError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            if date < start || date > end {
                continue;
            }

            let bar = PriceBar {
                symbol: symbol.to_string(),
                date,
                open: Self::number(&record, 1, "open")?,
                high: Self::number(&record, 2, "high")?,
                low: Self::number(&record, 3, "low")?,
                close: Self::number(&record, 4, "close")?,
                volume: Self::number(&record, 5, "volume")?,
            };
            bar.validate()?;
            bars.push(bar);
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }

    fn data_range(
        &self,
        symbol: &str,
        exchange: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, DeepcountError> {
        if !self.csv_path(symbol, exchange).exists() {
            return Ok(None);
        }
        let bars = self.fetch_bars(symbol, exchange, NaiveDate::MIN, NaiveDate::MAX)?;
        match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, bars.len()))),
            _ => Ok(None),
        }
    }
}
