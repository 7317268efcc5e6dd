//! Signal scanner: crossing detection over the indicator frame.
//!
//! [`SignalScanner`] walks the frame forward exactly once as a lazy,
//! finite iterator of [`Signal`]s. Every rule is a crossing test, not a
//! level test: it compares the current row against the previous one, so
//! scanning starts at index 1. Entry/exit gating lives in the scanner's
//! own state: it never emits an open while a position is pending, nor a
//! close while flat.

use crate::domain::indicator::{IndicatorBar, SignalValues};
use crate::domain::position::Side;
use crate::domain::strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Open,
    Close,
}

/// A crossing event at a frame index. The fill for the event happens at
/// the next row's open; translating index to price is the orchestrator's
/// job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal {
    pub kind: SignalKind,
    pub index: usize,
}

/// `a` crossing above `b`: previous row on or under, current row strictly
/// over. The mirror test covers crossing below.
fn crossed_above(prev_a: f64, prev_b: f64, cur_a: f64, cur_b: f64) -> bool {
    prev_a <= prev_b && cur_a > cur_b
}

fn crossed_below(prev_a: f64, prev_b: f64, cur_a: f64, cur_b: f64) -> bool {
    prev_a >= prev_b && cur_a < cur_b
}

pub struct SignalScanner<'a> {
    frame: &'a [IndicatorBar],
    strategy: &'a Strategy,
    side: Side,
    in_position: bool,
    next_index: usize,
}

impl<'a> SignalScanner<'a> {
    pub fn new(frame: &'a [IndicatorBar], strategy: &'a Strategy, side: Side) -> Self {
        Self {
            frame,
            strategy,
            side,
            in_position: false,
            next_index: 1,
        }
    }

    fn entry_fires(&self, prev: &SignalValues, cur: &SignalValues, prev_close: f64, close: f64) -> bool {
        match (self.strategy, self.side, prev, cur) {
            (
                Strategy::MaCrossover { .. },
                Side::Long,
                SignalValues::MaPair { short: ps, long: pl },
                SignalValues::MaPair { short: cs, long: cl },
            ) => crossed_above(*ps, *pl, *cs, *cl),
            (
                Strategy::MaCrossover { .. },
                Side::Short,
                SignalValues::MaPair { short: ps, long: pl },
                SignalValues::MaPair { short: cs, long: cl },
            ) => crossed_above(*pl, *ps, *cl, *cs),
            (
                Strategy::Rsi { oversold, .. },
                Side::Long,
                SignalValues::Rsi(prev_rsi),
                SignalValues::Rsi(rsi),
            ) => crossed_above(*prev_rsi, f64::from(*oversold), *rsi, f64::from(*oversold)),
            (
                Strategy::Rsi { overbought, .. },
                Side::Short,
                SignalValues::Rsi(prev_rsi),
                SignalValues::Rsi(rsi),
            ) => crossed_below(*prev_rsi, f64::from(*overbought), *rsi, f64::from(*overbought)),
            (
                Strategy::BollingerBands,
                Side::Long,
                SignalValues::Bands { lower: pl, .. },
                SignalValues::Bands { lower: cl, .. },
            ) => crossed_above(prev_close, *pl, close, *cl),
            (
                Strategy::BollingerBands,
                Side::Short,
                SignalValues::Bands { upper: pu, .. },
                SignalValues::Bands { upper: cu, .. },
            ) => crossed_above(prev_close, *pu, close, *cu),
            _ => false,
        }
    }

    fn exit_fires(&self, prev: &SignalValues, cur: &SignalValues, prev_close: f64, close: f64) -> bool {
        match (self.strategy, self.side, prev, cur) {
            (
                Strategy::MaCrossover { .. },
                Side::Long,
                SignalValues::MaPair { short: ps, long: pl },
                SignalValues::MaPair { short: cs, long: cl },
            ) => crossed_above(*pl, *ps, *cl, *cs),
            (
                Strategy::MaCrossover { .. },
                Side::Short,
                SignalValues::MaPair { short: ps, long: pl },
                SignalValues::MaPair { short: cs, long: cl },
            ) => crossed_above(*ps, *pl, *cs, *cl),
            (
                Strategy::Rsi { overbought, .. },
                Side::Long,
                SignalValues::Rsi(prev_rsi),
                SignalValues::Rsi(rsi),
            ) => crossed_below(*prev_rsi, f64::from(*overbought), *rsi, f64::from(*overbought)),
            (
                Strategy::Rsi { oversold, .. },
                Side::Short,
                SignalValues::Rsi(prev_rsi),
                SignalValues::Rsi(rsi),
            ) => crossed_above(*prev_rsi, f64::from(*oversold), *rsi, f64::from(*oversold)),
            (
                Strategy::BollingerBands,
                Side::Long,
                SignalValues::Bands { upper: pu, .. },
                SignalValues::Bands { upper: cu, .. },
            ) => crossed_below(prev_close, *pu, close, *cu),
            (
                Strategy::BollingerBands,
                Side::Short,
                SignalValues::Bands { lower: pl, .. },
                SignalValues::Bands { lower: cl, .. },
            ) => crossed_below(prev_close, *pl, close, *cl),
            _ => false,
        }
    }
}

impl Iterator for SignalScanner<'_> {
    type Item = Signal;

    fn next(&mut self) -> Option<Signal> {
        while self.next_index < self.frame.len() {
            let index = self.next_index;
            self.next_index += 1;

            let prev = &self.frame[index - 1];
            let cur = &self.frame[index];

            if !self.in_position
                && self.entry_fires(&prev.values, &cur.values, prev.close, cur.close)
            {
                self.in_position = true;
                return Some(Signal {
                    kind: SignalKind::Open,
                    index,
                });
            }

            if self.in_position
                && self.exit_fires(&prev.values, &cur.values, prev.close, cur.close)
            {
                self.in_position = false;
                return Some(Signal {
                    kind: SignalKind::Close,
                    index,
                });
            }
        }
        None
    }
}
