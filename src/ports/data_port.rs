//! Market data port trait.

use crate::domain::bar::Bar;
use crate::domain::error::BackstratError;

/// Supplies daily price history. An empty series is the collaborator's
/// sole unavailability signal (failed lookup, unknown ticker); errors are
/// reserved for data that exists but cannot be read.
pub trait MarketDataPort {
    /// Maximum available daily history for a ticker, ordered by date.
    fn fetch_daily(&self, ticker: &str) -> Result<Vec<Bar>, BackstratError>;

    /// Tickers this source has history for.
    fn list_tickers(&self) -> Result<Vec<String>, BackstratError>;
}
