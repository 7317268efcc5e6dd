//! CSV trade log adapter.
//!
//! One file per run, named `{ticker}_{strategy-label}_{hex}.csv` with a
//! random suffix so reruns never clobber an earlier log. The file is
//! created lazily on the first recorded trade; a run that closes none
//! leaves no file behind. Prices and profit are rounded to two decimals
//! at this boundary only — the engine keeps full precision.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::error::BackstratError;
use crate::domain::position::Trade;
use crate::domain::strategy::Strategy;
use crate::ports::trade_log_port::TradeLogPort;

const HEADER: [&str; 7] = [
    "Trade Number",
    "Date Open",
    "Date Close",
    "Position",
    "Entry Price",
    "Exit Price",
    "Trade Profit",
];

pub struct CsvTradeLog {
    path: PathBuf,
    writer: Option<csv::Writer<File>>,
}

impl CsvTradeLog {
    /// Plan a log file for one run. No file is created until the first
    /// trade is recorded.
    pub fn create(dir: &Path, ticker: &str, strategy: &Strategy) -> Self {
        let suffix: u32 = rand::random();
        let path = dir.join(format!("{}_{}_{:08x}.csv", ticker, strategy.label(), suffix));
        Self { path, writer: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether any trade has been written (and hence the file exists).
    pub fn is_written(&self) -> bool {
        self.writer.is_some()
    }

    fn writer(&mut self) -> Result<&mut csv::Writer<File>, BackstratError> {
        match &mut self.writer {
            Some(writer) => Ok(writer),
            slot @ None => {
                let file = File::create(&self.path).map_err(|e| {
                    std::io::Error::new(
                        e.kind(),
                        format!("cannot create trade log {}: {e}", self.path.display()),
                    )
                })?;
                let mut writer = csv::Writer::from_writer(file);
                writer.write_record(HEADER)?;
                Ok(slot.insert(writer))
            }
        }
    }
}

impl TradeLogPort for CsvTradeLog {
    fn record(&mut self, trade: &Trade) -> Result<(), BackstratError> {
        let writer = self.writer()?;
        writer.write_record([
            trade.trade_number.to_string(),
            trade.open_date.to_string(),
            trade.close_date.to_string(),
            trade.side.to_string(),
            format!("{:.2}", trade.entry_price),
            format!("{:.2}", trade.exit_price),
            format!("{:.2}", trade.profit),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), BackstratError> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}
