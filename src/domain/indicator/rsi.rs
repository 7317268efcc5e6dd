//! RSI (Relative Strength Index) of close.
//!
//! Wilder's smoothing for average gain/loss:
//! - First average: simple mean of the first n gains/losses
//! - Subsequent: avg = (prev_avg * (n-1) + current) / n
//!
//! RSI = 100 - (100 / (1 + avg_gain / avg_loss)); avg_loss == 0 → 100.
//! Warmup: first n bars are invalid (n price changes seed the average).

use crate::domain::bar::Bar;
use crate::domain::indicator::IndicatorPoint;

pub fn calculate_rsi(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    let invalid = IndicatorPoint {
        valid: false,
        value: 0.0,
    };

    if period == 0 || bars.len() < 2 {
        return vec![invalid; bars.len()];
    }

    let mut points = Vec::with_capacity(bars.len());
    points.push(invalid);

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for i in 1..bars.len() {
        let change = bars[i].close - bars[i - 1].close;
        let gain = change.max(0.0);
        let loss = (-change).max(0.0);

        if i < period {
            // Accumulating the seed window; running mean over i changes.
            avg_gain = (avg_gain * (i - 1) as f64 + gain) / i as f64;
            avg_loss = (avg_loss * (i - 1) as f64 + loss) / i as f64;
            points.push(invalid);
            continue;
        }

        // At i == period this doubles as the seed: the update applied to the
        // running mean of the first (period-1) changes yields the simple
        // mean of the first period changes.
        avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;

        let rsi = if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - (100.0 / (1.0 + avg_gain / avg_loss))
        };
        points.push(IndicatorPoint {
            valid: true,
            value: rsi,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_bars(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
            })
            .collect()
    }

    #[test]
    fn rsi_empty_bars() {
        let points = calculate_rsi(&[], 14);
        assert!(points.is_empty());
    }

    #[test]
    fn rsi_single_bar() {
        let points = calculate_rsi(&make_bars(&[100.0]), 14);
        assert_eq!(points.len(), 1);
        assert!(!points[0].valid);
    }

    #[test]
    fn rsi_warmup_period() {
        let closes: Vec<f64> = (0..16).map(|i| 100.0 + (i % 5) as f64 * 2.0).collect();
        let points = calculate_rsi(&make_bars(&closes), 14);

        assert_eq!(points.len(), 16);
        for (i, p) in points.iter().take(14).enumerate() {
            assert!(!p.valid, "bar {i} should be invalid");
        }
        assert!(points[14].valid);
        assert!(points[15].valid);
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let points = calculate_rsi(&make_bars(&closes), 14);

        assert!(points[14].valid);
        assert!((points[14].value - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        let points = calculate_rsi(&make_bars(&closes), 14);

        assert!(points[14].valid);
        assert!((points[14].value - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rsi_stays_in_range() {
        let closes: Vec<f64> = (0..30)
            .map(|i| 100.0 + ((i % 7) as f64 - 3.0) * 2.0)
            .collect();
        let points = calculate_rsi(&make_bars(&closes), 14);

        for p in points.iter().filter(|p| p.valid) {
            assert!((0.0..=100.0).contains(&p.value), "RSI {} out of range", p.value);
        }
    }

    #[test]
    fn rsi_balanced_moves_near_50() {
        // Alternating +1/-1 changes: gains and losses average out.
        let closes: Vec<f64> = (0..30)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect();
        let points = calculate_rsi(&make_bars(&closes), 14);

        let last = points.last().unwrap();
        assert!(last.valid);
        approx::assert_relative_eq!(last.value, 50.0, epsilon = 5.0);
    }

    #[test]
    fn rsi_zero_period_is_all_invalid() {
        let points = calculate_rsi(&make_bars(&[100.0, 101.0]), 0);
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| !p.valid));
    }
}
