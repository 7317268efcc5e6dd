#![allow(dead_code)]

use backstrat::domain::bar::Bar;
use backstrat::domain::error::BackstratError;
use backstrat::ports::data_port::MarketDataPort;
use chrono::NaiveDate;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<Bar>>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, ticker: &str, bars: Vec<Bar>) -> Self {
        self.data.insert(ticker.to_string(), bars);
        self
    }
}

impl MarketDataPort for MockDataPort {
    fn fetch_daily(&self, ticker: &str) -> Result<Vec<Bar>, BackstratError> {
        Ok(self.data.get(ticker).cloned().unwrap_or_default())
    }

    fn list_tickers(&self) -> Result<Vec<String>, BackstratError> {
        let mut tickers: Vec<String> = self.data.keys().cloned().collect();
        tickers.sort();
        Ok(tickers)
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// One session per close, dated consecutively from 2024-01-01,
/// with each open one point below its close.
pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    let start = date(2024, 1, 1);
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            date: start + chrono::Days::new(i as u64),
            open: close - 1.0,
            high: close + 2.0,
            low: close - 2.0,
            close,
        })
        .collect()
}
