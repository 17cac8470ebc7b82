//! TD Sequential count engine.
//!
//! TDD[i] = sign(close[i] - close[i-4]); undefined while no bar 4 periods
//! prior exists. TDC[i] is the signed run length of consecutive equal
//! directions: a tie resets it to 0, a sign change starts a new run at ±1.
//! The first 4 counts are 0, not undefined.

use crate::domain::error::DeepcountError;
use crate::domain::ohlc::PriceBar;

/// Bars looked back for the direction comparison.
pub const LOOKBACK: usize = 4;

/// Direction of close[i] relative to close[i - 4].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TdDirection {
    Up,
    Down,
    Flat,
}

impl TdDirection {
    fn between(current: f64, prior: f64) -> TdDirection {
        if current > prior {
            TdDirection::Up
        } else if current < prior {
            TdDirection::Down
        } else {
            TdDirection::Flat
        }
    }

    pub fn sign(&self) -> i32 {
        match self {
            TdDirection::Up => 1,
            TdDirection::Down => -1,
            TdDirection::Flat => 0,
        }
    }
}

/// Per-bar engine output. `direction` is `None` for the first 4 bars, where
/// no comparator exists; `count` is 0 there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountPoint {
    pub direction: Option<TdDirection>,
    pub count: i32,
}

/// Compute (direction, count) for every close in order.
///
/// Single forward pass carrying only the previous direction and count.
/// Output length equals input length; an empty input yields an empty output.
/// Any non-finite close fails with [`DeepcountError::NonFiniteClose`] before
/// any computation.
pub fn compute_counts(closes: &[f64]) -> Result<Vec<CountPoint>, DeepcountError> {
    if let Some((index, &value)) = closes.iter().enumerate().find(|(_, c)| !c.is_finite()) {
        return Err(DeepcountError::NonFiniteClose { index, value });
    }

    let mut points = Vec::with_capacity(closes.len());
    let mut prev_direction: Option<TdDirection> = None;
    let mut prev_count: i32 = 0;

    for (i, &close) in closes.iter().enumerate() {
        let (direction, count) = if i < LOOKBACK {
            (None, 0)
        } else {
            let direction = TdDirection::between(close, closes[i - LOOKBACK]);
            let count = match direction {
                TdDirection::Flat => 0,
                _ => match prev_direction {
                    Some(prev) if prev == direction => prev_count + direction.sign(),
                    _ => direction.sign(),
                },
            };
            (Some(direction), count)
        };

        points.push(CountPoint { direction, count });
        prev_direction = direction;
        prev_count = count;
    }

    Ok(points)
}

/// [`compute_counts`] over the closes of a bar series.
pub fn compute_counts_for_bars(bars: &[PriceBar]) -> Result<Vec<CountPoint>, DeepcountError> {
    let closes: Vec<f64> = bars.iter().map(|bar| bar.close).collect();
    compute_counts(&closes)
}
