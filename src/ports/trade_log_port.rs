//! Trade audit log port trait.

use crate::domain::error::BackstratError;
use crate::domain::position::Trade;

/// Append-only sink for closed trades. Implementations acquire their
/// backing resource lazily on the first [`record`](TradeLogPort::record),
/// so a run that closes no trades leaves nothing behind.
pub trait TradeLogPort {
    fn record(&mut self, trade: &Trade) -> Result<(), BackstratError>;

    /// Flush buffered rows. Called once by the orchestrator when the run
    /// completes; dropping an unfinished log still releases its resource.
    fn finish(&mut self) -> Result<(), BackstratError>;
}
