//! Position sides, the open position, and closed trades.

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Long,
    Short,
}

impl Side {
    /// Parse the position input supplied by the caller. Only "Long" and
    /// "Short" (case-insensitive) are valid.
    pub fn parse(value: &str) -> Option<Side> {
        match value.trim().to_lowercase().as_str() {
            "long" => Some(Side::Long),
            "short" => Some(Side::Short),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Long => "Long",
            Side::Short => "Short",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single open position of a run. Created on an entry fill, consumed
/// on exit.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub side: Side,
    pub entry_date: NaiveDate,
    pub entry_price: f64,
    pub trade_number: u32,
}

impl Position {
    /// Close the position, producing the completed trade. Profit is
    /// exit − entry for Long, entry − exit for Short.
    pub fn close(self, close_date: NaiveDate, exit_price: f64) -> Trade {
        let profit = match self.side {
            Side::Long => exit_price - self.entry_price,
            Side::Short => self.entry_price - exit_price,
        };
        Trade {
            trade_number: self.trade_number,
            open_date: self.entry_date,
            close_date,
            side: self.side,
            entry_price: self.entry_price,
            exit_price,
            profit,
        }
    }
}

/// An immutable record of one round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub trade_number: u32,
    pub open_date: NaiveDate,
    pub close_date: NaiveDate,
    pub side: Side,
    pub entry_price: f64,
    pub exit_price: f64,
    pub profit: f64,
}

impl Trade {
    /// Win classification is a total function of the profit sign: a
    /// zero-profit trade counts as a loss.
    pub fn is_win(&self) -> bool {
        self.profit > 0.0
    }
}
