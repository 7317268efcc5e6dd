//! In-process trade log adapter.
//!
//! Keeps closed trades in a vector. Used by the test suite and by
//! embedders that want the result without an on-disk audit file.

use crate::domain::error::BackstratError;
use crate::domain::position::Trade;
use crate::ports::trade_log_port::TradeLogPort;

#[derive(Debug, Default)]
pub struct MemoryTradeLog {
    pub trades: Vec<Trade>,
    pub finished: bool,
}

impl MemoryTradeLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TradeLogPort for MemoryTradeLog {
    fn record(&mut self, trade: &Trade) -> Result<(), BackstratError> {
        self.trades.push(trade.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), BackstratError> {
        self.finished = true;
        Ok(())
    }
}
