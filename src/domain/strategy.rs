//! Strategy variants and parameter validation.
//!
//! Each strategy carries its validated parameter payload. Parameters arrive
//! from the caller as a "lower" and "higher" pair of raw integers;
//! `Strategy::from_inputs` maps and validates them per variant before a
//! backtest may start.

use crate::domain::error::BackstratError;

/// RSI lookback, fixed by the strategy definition.
pub const RSI_PERIOD: usize = 14;

/// Bollinger Bands lookback and band width, fixed by the strategy definition.
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STDDEV_MULT: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Rolling-mean crossover of two window lengths, short < long.
    MaCrossover { short: usize, long: usize },
    /// 14-period Wilder RSI against oversold/overbought levels.
    Rsi { oversold: u32, overbought: u32 },
    /// 20-period mean ± 2σ bands. No free parameters.
    BollingerBands,
}

impl Strategy {
    /// Build a strategy from its display name and the raw lower/higher
    /// parameter inputs. Accepts the original strategy labels and
    /// kebab-case aliases.
    pub fn from_inputs(
        name: &str,
        lower: Option<i64>,
        higher: Option<i64>,
    ) -> Result<Self, BackstratError> {
        let normalized = name.trim().to_lowercase();
        match normalized.as_str() {
            "ma crossover" | "ma-crossover" | "ma" => {
                let short = require_positive("short_ma", lower)?;
                let long = require_positive("long_ma", higher)?;
                require_ordered("short_ma", short, "long_ma", long)?;
                Ok(Strategy::MaCrossover {
                    short: short as usize,
                    long: long as usize,
                })
            }
            "rsi overbought/oversold" | "rsi overbought oversold" | "rsi" => {
                let oversold = require_positive("oversold_level", lower)?;
                let overbought = require_positive("overbought_level", higher)?;
                require_ordered("oversold_level", oversold, "overbought_level", overbought)?;
                Ok(Strategy::Rsi {
                    oversold: oversold as u32,
                    overbought: overbought as u32,
                })
            }
            "bollinger bands" | "bollinger-bands" | "bollinger" => Ok(Strategy::BollingerBands),
            _ => Err(BackstratError::UnknownStrategy {
                name: name.to_string(),
            }),
        }
    }

    /// Number of leading rows the indicator frame drops before the first
    /// row where every indicator value is defined.
    pub fn warmup(&self) -> usize {
        match self {
            Strategy::MaCrossover { long, .. } => long.saturating_sub(1),
            Strategy::Rsi { .. } => RSI_PERIOD,
            Strategy::BollingerBands => BOLLINGER_PERIOD - 1,
        }
    }

    /// Short label used in trade-log filenames.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::MaCrossover { .. } => "ma-crossover",
            Strategy::Rsi { .. } => "rsi",
            Strategy::BollingerBands => "bollinger-bands",
        }
    }
}

fn require_positive(field: &str, value: Option<i64>) -> Result<i64, BackstratError> {
    match value {
        Some(v) if v > 0 => Ok(v),
        Some(_) => Err(BackstratError::invalid_parameter(
            field,
            "must be a positive integer",
        )),
        None => Err(BackstratError::invalid_parameter(field, "is required")),
    }
}

fn require_ordered(
    lower_field: &str,
    lower: i64,
    higher_field: &str,
    higher: i64,
) -> Result<(), BackstratError> {
    if lower >= higher {
        return Err(BackstratError::InvalidParameter {
            field: lower_field.to_string(),
            reason: format!("must be less than {higher_field}"),
        });
    }
    Ok(())
}
