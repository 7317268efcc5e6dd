//! Single-position ledger.
//!
//! Holds the at-most-one open position of a run and turns exits into
//! completed trades. The scanner's own state gating should make the error
//! paths unreachable; if one fires, the scanner and ledger have
//! desynchronized and the run must abort.

use chrono::NaiveDate;

use crate::domain::error::BackstratError;
use crate::domain::position::{Position, Side, Trade};

#[derive(Debug, Default)]
pub struct PositionLedger {
    open: Option<Position>,
    trades_opened: u32,
}

impl PositionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open a position at the given fill. Trade numbers start at 1.
    pub fn open(
        &mut self,
        side: Side,
        entry_date: NaiveDate,
        entry_price: f64,
    ) -> Result<(), BackstratError> {
        if self.open.is_some() {
            return Err(BackstratError::Desync {
                reason: format!("open {side} signal while a position is already live"),
            });
        }
        self.trades_opened += 1;
        self.open = Some(Position {
            side,
            entry_date,
            entry_price,
            trade_number: self.trades_opened,
        });
        Ok(())
    }

    /// Close the open position at the given fill, yielding the trade.
    pub fn close(
        &mut self,
        close_date: NaiveDate,
        exit_price: f64,
    ) -> Result<Trade, BackstratError> {
        match self.open.take() {
            Some(position) => Ok(position.close(close_date, exit_price)),
            None => Err(BackstratError::Desync {
                reason: "close signal with no open position".into(),
            }),
        }
    }
}
