//! Daily OHLC bar representation.

use chrono::NaiveDate;

/// One trading session for a single ticker. A backtest operates on an
/// ordered slice of bars, strictly increasing by date with no duplicates;
/// the data adapter enforces that ordering on load.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Sort bars by date and drop duplicate sessions, keeping the first
/// occurrence of each date.
pub fn normalize(bars: &mut Vec<Bar>) {
    bars.sort_by_key(|b| b.date);
    bars.dedup_by_key(|b| b.date);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, close: f64) -> Bar {
        Bar {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            open: close - 1.0,
            high: close + 1.0,
            low: close - 2.0,
            close,
        }
    }

    #[test]
    fn normalize_sorts_by_date() {
        let mut bars = vec![
            bar("2024-01-03", 102.0),
            bar("2024-01-01", 100.0),
            bar("2024-01-02", 101.0),
        ];
        normalize(&mut bars);
        let dates: Vec<String> = bars.iter().map(|b| b.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn normalize_drops_duplicate_dates() {
        let mut bars = vec![
            bar("2024-01-01", 100.0),
            bar("2024-01-02", 101.0),
            bar("2024-01-02", 999.0),
        ];
        normalize(&mut bars);
        assert_eq!(bars.len(), 2);
        assert!((bars[1].close - 101.0).abs() < f64::EPSILON);
    }

    #[test]
    fn normalize_empty_is_noop() {
        let mut bars: Vec<Bar> = vec![];
        normalize(&mut bars);
        assert!(bars.is_empty());
    }
}
