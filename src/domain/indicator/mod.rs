//! Indicator columns and the warm-up-truncated indicator frame.
//!
//! Each indicator module returns one point per input bar with a `valid`
//! flag that is false during the warm-up window. [`build_frame`] zips the
//! columns a strategy needs with the raw bars and drops the warm-up prefix,
//! so the signal scanner never sees an undefined indicator value.

pub mod sma;
pub mod rsi;
pub mod bollinger;

use chrono::NaiveDate;

use crate::domain::bar::Bar;
use crate::domain::strategy::{Strategy, BOLLINGER_PERIOD, BOLLINGER_STDDEV_MULT, RSI_PERIOD};

/// A single indicator value aligned with one bar.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorPoint {
    pub valid: bool,
    pub value: f64,
}

/// Per-strategy indicator payload for one row of the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalValues {
    MaPair { short: f64, long: f64 },
    Rsi(f64),
    Bands { upper: f64, lower: f64 },
}

/// One row of the indicator frame: the bar fields the scanner and the
/// fill model need, plus the strategy's indicator values.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorBar {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub values: SignalValues,
}

/// Derive the indicator frame for a strategy. Rows lacking enough history
/// to compute every indicator are dropped; a series shorter than the
/// warm-up window yields an empty frame, not an error.
pub fn build_frame(bars: &[Bar], strategy: &Strategy) -> Vec<IndicatorBar> {
    match strategy {
        Strategy::MaCrossover { short, long } => {
            let short_ma = sma::calculate_sma(bars, *short);
            let long_ma = sma::calculate_sma(bars, *long);
            bars.iter()
                .zip(short_ma.iter().zip(long_ma.iter()))
                .filter(|(_, (s, l))| s.valid && l.valid)
                .map(|(bar, (s, l))| IndicatorBar {
                    date: bar.date,
                    open: bar.open,
                    close: bar.close,
                    values: SignalValues::MaPair {
                        short: s.value,
                        long: l.value,
                    },
                })
                .collect()
        }
        Strategy::Rsi { .. } => {
            let rsi = rsi::calculate_rsi(bars, RSI_PERIOD);
            bars.iter()
                .zip(rsi.iter())
                .filter(|(_, p)| p.valid)
                .map(|(bar, p)| IndicatorBar {
                    date: bar.date,
                    open: bar.open,
                    close: bar.close,
                    values: SignalValues::Rsi(p.value),
                })
                .collect()
        }
        Strategy::BollingerBands => {
            let bands = bollinger::calculate_bollinger(bars, BOLLINGER_PERIOD, BOLLINGER_STDDEV_MULT);
            bars.iter()
                .zip(bands.iter())
                .filter(|(_, b)| b.valid)
                .map(|(bar, b)| IndicatorBar {
                    date: bar.date,
                    open: bar.open,
                    close: bar.close,
                    values: SignalValues::Bands {
                        upper: b.upper,
                        lower: b.lower,
                    },
                })
                .collect()
        }
    }
}
