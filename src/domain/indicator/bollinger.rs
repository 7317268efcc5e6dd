//! Bollinger Bands over close.
//!
//! - Middle: simple moving average over n periods
//! - Upper/Lower: middle ± (multiplier × population StdDev)
//!
//! StdDev divides by N, not N-1. Warmup: first (period-1) bars are invalid.

use crate::domain::bar::Bar;

#[derive(Debug, Clone, Copy)]
pub struct BandPoint {
    pub valid: bool,
    pub upper: f64,
    pub lower: f64,
}

pub fn calculate_bollinger(bars: &[Bar], period: usize, stddev_mult: f64) -> Vec<BandPoint> {
    let mut points = Vec::with_capacity(bars.len());
    let warmup = period.saturating_sub(1);

    for i in 0..bars.len() {
        if period == 0 || i < warmup {
            points.push(BandPoint {
                valid: false,
                upper: 0.0,
                lower: 0.0,
            });
            continue;
        }

        let window = &bars[i + 1 - period..=i];
        let mean: f64 = window.iter().map(|b| b.close).sum::<f64>() / period as f64;
        let variance: f64 = window
            .iter()
            .map(|b| {
                let diff = b.close - mean;
                diff * diff
            })
            .sum::<f64>()
            / period as f64;
        let stddev = variance.sqrt();

        points.push(BandPoint {
            valid: true,
            upper: mean + stddev_mult * stddev,
            lower: mean - stddev_mult * stddev,
        });
    }

    points
}
