//! Count snapshot over a front-month contract.
//!
//! Resolves the front-month symbol for an as-of date, pulls its bars through
//! a [`DataPort`], and attaches the TD Sequential count series.

use crate::domain::contract::front_month_symbol;
use crate::domain::error::DeepcountError;
use crate::domain::ohlc::PriceBar;
use crate::domain::sequential::{compute_counts_for_bars, CountPoint};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DEFAULT_EXCHANGE: &str = "GLOBEX";

/// Snapshot settings, read from the `[snapshot]` config section.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Base futures symbol, e.g. `ES`.
    pub base_symbol: String,
    pub exchange: String,
    /// Directory the data adapter reads from.
    pub data_dir: PathBuf,
}

impl SnapshotConfig {
    /// `symbol` is required; `exchange` defaults to GLOBEX and `data_dir`
    /// to the current directory.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, DeepcountError> {
        let base_symbol = config.get_string("snapshot", "symbol").ok_or_else(|| {
            DeepcountError::ConfigMissing {
                section: "snapshot".into(),
                key: "symbol".into(),
            }
        })?;
        let exchange = config
            .get_string("snapshot", "exchange")
            .unwrap_or_else(|| DEFAULT_EXCHANGE.to_string());
        let data_dir = PathBuf::from(
            config
                .get_string("snapshot", "data_dir")
                .unwrap_or_else(|| ".".to_string()),
        );
        Ok(Self {
            base_symbol,
            exchange,
            data_dir,
        })
    }
}

/// Bars and count series for one contract as of a date.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub symbol: String,
    pub bars: Vec<PriceBar>,
    pub points: Vec<CountPoint>,
}

/// Resolve the front-month symbol as of `as_of`, fetch its bars over
/// `[start, as_of]`, validate them, and compute the count series.
pub fn take_snapshot(
    data: &dyn DataPort,
    config: &SnapshotConfig,
    start: NaiveDate,
    as_of: NaiveDate,
) -> Result<Snapshot, DeepcountError> {
    let symbol =
        front_month_symbol(&config.base_symbol, as_of).ok_or_else(|| DeepcountError::Data {
            reason: format!("no quarterly expiry after {}", as_of),
        })?;

    let bars = data.fetch_bars(&symbol, &config.exchange, start, as_of)?;
    for bar in &bars {
        bar.validate()?;
    }

    let points = compute_counts_for_bars(&bars)?;
    Ok(Snapshot {
        symbol,
        bars,
        points,
    })
}
