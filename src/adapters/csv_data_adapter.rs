//! CSV file market data adapter.
//!
//! One `{TICKER}.csv` file per ticker under a base directory, columns
//! `date,open,high,low,close` (extra columns such as volume are ignored).
//! A missing file is not an error: the port contract makes an empty series
//! the unavailability signal.

use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::domain::bar::{normalize, Bar};
use crate::domain::error::BackstratError;
use crate::ports::data_port::MarketDataPort;

pub struct CsvDataAdapter {
    base_path: PathBuf,
}

impl CsvDataAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn bar_file(&self, ticker: &str) -> PathBuf {
        self.base_path.join(format!("{ticker}.csv"))
    }
}

fn parse_price(record: &csv::StringRecord, index: usize, column: &str) -> Result<f64, BackstratError> {
    record
        .get(index)
        .ok_or_else(|| BackstratError::BadData {
            reason: format!("missing {column} column"),
        })?
        .trim()
        .parse()
        .map_err(|e| BackstratError::BadData {
            reason: format!("invalid {column} value: {e}"),
        })
}

impl MarketDataPort for CsvDataAdapter {
    fn fetch_daily(&self, ticker: &str) -> Result<Vec<Bar>, BackstratError> {
        let path = self.bar_file(ticker);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| BackstratError::BadData {
                reason: format!("CSV parse error in {}: {e}", path.display()),
            })?;

            let date_str = record.get(0).ok_or_else(|| BackstratError::BadData {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|e| {
                BackstratError::BadData {
                    reason: format!("invalid date '{date_str}': {e}"),
                }
            })?;

            bars.push(Bar {
                date,
                open: parse_price(&record, 1, "open")?,
                high: parse_price(&record, 2, "high")?,
                low: parse_price(&record, 3, "low")?,
                close: parse_price(&record, 4, "close")?,
            });
        }

        normalize(&mut bars);
        Ok(bars)
    }

    fn list_tickers(&self) -> Result<Vec<String>, BackstratError> {
        let entries = fs::read_dir(&self.base_path)?;
        let mut tickers = Vec::new();

        for entry in entries {
            let name = entry?.file_name();
            let name = name.to_string_lossy();
            if let Some(ticker) = name.strip_suffix(".csv") {
                tickers.push(ticker.to_string());
            }
        }

        tickers.sort();
        Ok(tickers)
    }
}
