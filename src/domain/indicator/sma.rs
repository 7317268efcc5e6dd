//! Simple moving average of close.
//!
//! Warmup: first (period-1) bars are invalid.

use crate::domain::bar::Bar;
use crate::domain::indicator::IndicatorPoint;

pub fn calculate_sma(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 {
        return bars
            .iter()
            .map(|_| IndicatorPoint {
                valid: false,
                value: 0.0,
            })
            .collect();
    }

    let mut points = Vec::with_capacity(bars.len());
    let mut window_sum = 0.0;

    for i in 0..bars.len() {
        window_sum += bars[i].close;
        if i >= period {
            window_sum -= bars[i - period].close;
        }

        if i + 1 >= period {
            points.push(IndicatorPoint {
                valid: true,
                value: window_sum / period as f64,
            });
        } else {
            points.push(IndicatorPoint {
                valid: false,
                value: 0.0,
            });
        }
    }

    points
}
