//! Backtest orchestrator.
//!
//! One run is one synchronous pass: fetch bars, build the indicator frame,
//! walk the signal scanner, feed fills through the position ledger, record
//! each closed trade, and aggregate the result. The orchestrator owns the
//! ledger and the result for the duration of the run; bars are borrowed
//! read-only from the data port.

use crate::domain::error::BackstratError;
use crate::domain::indicator::{build_frame, IndicatorBar};
use crate::domain::ledger::PositionLedger;
use crate::domain::position::{Side, Trade};
use crate::domain::signal::{SignalKind, SignalScanner};
use crate::domain::strategy::Strategy;
use crate::ports::data_port::MarketDataPort;
use crate::ports::trade_log_port::TradeLogPort;

/// Aggregate outcome of one run, mutated once per closed trade.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BacktestResult {
    pub total_profit: f64,
    pub wins: u32,
    pub losses: u32,
}

impl BacktestResult {
    fn record(&mut self, trade: &Trade) {
        self.total_profit += trade.profit;
        if trade.is_win() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn trades(&self) -> u32 {
        self.wins + self.losses
    }

    /// 100 × wins / (wins + losses); 0.0 when no trades closed.
    pub fn win_percentage(&self) -> f64 {
        let total = self.wins + self.losses;
        if total == 0 {
            0.0
        } else {
            100.0 * f64::from(self.wins) / f64::from(total)
        }
    }
}

/// Run one backtest for a ticker and side.
///
/// Fills execute at the next session's open. A close signal on the final
/// frame row, or a position still open when the series ends, exits at the
/// final bar's close. An open signal on the final row has no session left
/// to fill in and is skipped.
pub fn run_backtest(
    data: &dyn MarketDataPort,
    log: &mut dyn TradeLogPort,
    strategy: &Strategy,
    ticker: &str,
    side: Side,
) -> Result<BacktestResult, BackstratError> {
    let bars = data.fetch_daily(ticker)?;
    if bars.is_empty() {
        return Err(BackstratError::DataUnavailable {
            ticker: ticker.to_string(),
        });
    }

    let frame = build_frame(&bars, strategy);

    let mut ledger = PositionLedger::new();
    let mut result = BacktestResult::default();

    for signal in SignalScanner::new(&frame, strategy, side) {
        match signal.kind {
            SignalKind::Open => {
                if let Some(fill) = frame.get(signal.index + 1) {
                    ledger.open(side, fill.date, fill.open)?;
                }
            }
            SignalKind::Close => {
                let (date, price) = exit_fill(&frame, signal.index);
                let trade = ledger.close(date, price)?;
                log.record(&trade)?;
                result.record(&trade);
            }
        }
    }

    // Series exhausted with a position still open: force-close at the
    // final bar's close.
    if ledger.is_open() {
        if let Some(last) = frame.last() {
            let trade = ledger.close(last.date, last.close)?;
            log.record(&trade)?;
            result.record(&trade);
        }
    }

    log.finish()?;
    Ok(result)
}

fn exit_fill(frame: &[IndicatorBar], index: usize) -> (chrono::NaiveDate, f64) {
    match frame.get(index + 1) {
        Some(next) => (next.date, next.open),
        None => {
            let last = &frame[index];
            (last.date, last.close)
        }
    }
}
