//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_data_adapter::CsvDataAdapter;
use crate::adapters::csv_trade_log::CsvTradeLog;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::backtest::run_backtest;
use crate::domain::error::BackstratError;
use crate::domain::position::Side;
use crate::domain::strategy::Strategy;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::MarketDataPort;

#[derive(Parser, Debug)]
#[command(
    name = "backstrat",
    about = "Back-test a trading strategy against daily price history"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a backtest for one ticker
    Backtest {
        /// Ticker symbol to test (falls back to `[backtest] ticker` in the config)
        #[arg(short, long)]
        ticker: Option<String>,
        /// Position side: Long or Short
        #[arg(short, long)]
        position: String,
        /// Strategy: "MA Crossover", "RSI Overbought/Oversold" or "Bollinger Bands"
        #[arg(short, long)]
        strategy: String,
        /// Lower parameter (short MA window, or oversold level)
        #[arg(long)]
        lower: Option<i64>,
        /// Higher parameter (long MA window, or overbought level)
        #[arg(long)]
        higher: Option<i64>,
        /// INI config supplying directory defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Directory of {TICKER}.csv bar files (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Directory for the trade log (overrides config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List tickers with price history available
    ListTickers {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Validate strategy parameters without fetching any data
    Validate {
        #[arg(short, long)]
        strategy: String,
        #[arg(long)]
        lower: Option<i64>,
        #[arg(long)]
        higher: Option<i64>,
        /// Position side to check alongside the parameters
        #[arg(short, long)]
        position: Option<String>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let outcome = match cli.command {
        Command::Backtest {
            ticker,
            position,
            strategy,
            lower,
            higher,
            config,
            data,
            out,
        } => run_backtest_command(
            ticker,
            &position,
            &strategy,
            lower,
            higher,
            config.as_deref(),
            data,
            out,
        ),
        Command::ListTickers { config, data } => run_list_tickers(config.as_deref(), data),
        Command::Validate {
            strategy,
            lower,
            higher,
            position,
        } => run_validate(&strategy, lower, higher, position.as_deref()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Parse and validate the caller's inputs before anything touches disk.
pub fn validate_inputs(
    strategy: &str,
    lower: Option<i64>,
    higher: Option<i64>,
    position: Option<&str>,
) -> Result<(Strategy, Option<Side>), BackstratError> {
    let strategy = Strategy::from_inputs(strategy, lower, higher)?;
    let side = match position {
        Some(value) => Some(Side::parse(value).ok_or_else(|| BackstratError::InvalidSide {
            value: value.to_string(),
        })?),
        None => None,
    };
    Ok((strategy, side))
}

/// Directory resolution order: flag, then config key, then default.
pub fn resolve_dir(
    flag: Option<PathBuf>,
    config: Option<&FileConfigAdapter>,
    section: &str,
    key: &str,
    default: &str,
) -> PathBuf {
    flag.or_else(|| config.and_then(|c| c.get(section, key)).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default))
}

fn load_config(path: Option<&std::path::Path>) -> Result<Option<FileConfigAdapter>, BackstratError> {
    match path {
        Some(p) => Ok(Some(FileConfigAdapter::from_file(p)?)),
        None => Ok(None),
    }
}

/// Numeric strategy parameters may come from the flags or from the
/// `[backtest]` section of the config.
pub fn resolve_param(
    flag: Option<i64>,
    config: Option<&FileConfigAdapter>,
    key: &str,
) -> Option<i64> {
    flag.or_else(|| config.and_then(|c| c.get_int("backtest", key)))
}

/// The ticker may come from the flag or from `[backtest] ticker` in the
/// config; it must come from somewhere.
pub fn resolve_ticker(
    flag: Option<String>,
    config: Option<&FileConfigAdapter>,
) -> Result<String, BackstratError> {
    flag.or_else(|| config.and_then(|c| c.get("backtest", "ticker")))
        .ok_or_else(|| BackstratError::ConfigMissing {
            section: "backtest".to_string(),
            key: "ticker".to_string(),
        })
}

#[allow(clippy::too_many_arguments)]
fn run_backtest_command(
    ticker_flag: Option<String>,
    position: &str,
    strategy_name: &str,
    lower: Option<i64>,
    higher: Option<i64>,
    config_path: Option<&std::path::Path>,
    data_flag: Option<PathBuf>,
    out_flag: Option<PathBuf>,
) -> Result<(), BackstratError> {
    let config = load_config(config_path)?;
    let lower = resolve_param(lower, config.as_ref(), "lower");
    let higher = resolve_param(higher, config.as_ref(), "higher");

    let strategy = Strategy::from_inputs(strategy_name, lower, higher)?;
    let side = Side::parse(position).ok_or_else(|| BackstratError::InvalidSide {
        value: position.to_string(),
    })?;

    let ticker = resolve_ticker(ticker_flag, config.as_ref())?;
    let ticker = ticker.as_str();
    let data_dir = resolve_dir(data_flag, config.as_ref(), "data", "path", "data");
    let out_dir = resolve_dir(out_flag, config.as_ref(), "log", "dir", ".");

    eprintln!("Loading bars for {ticker} from {}", data_dir.display());
    let data = CsvDataAdapter::new(data_dir);
    let mut log = CsvTradeLog::create(&out_dir, ticker, &strategy);

    eprintln!("Running {} {} backtest on {ticker}", strategy.label(), side);
    let result = run_backtest(&data, &mut log, &strategy, ticker, side)?;

    println!("Total profit: {:.2}", result.total_profit);
    println!(
        "Win rate: {:.2}% ({} wins, {} losses)",
        result.win_percentage(),
        result.wins,
        result.losses
    );
    if log.is_written() {
        println!("Trade log: {}", log.path().display());
    } else {
        println!("Trade log: no trades closed");
    }
    Ok(())
}

fn run_list_tickers(
    config_path: Option<&std::path::Path>,
    data_flag: Option<PathBuf>,
) -> Result<(), BackstratError> {
    let config = load_config(config_path)?;
    let data_dir = resolve_dir(data_flag, config.as_ref(), "data", "path", "data");

    let data = CsvDataAdapter::new(data_dir);
    for ticker in data.list_tickers()? {
        println!("{ticker}");
    }
    Ok(())
}

fn run_validate(
    strategy: &str,
    lower: Option<i64>,
    higher: Option<i64>,
    position: Option<&str>,
) -> Result<(), BackstratError> {
    let (strategy, side) = validate_inputs(strategy, lower, higher, position)?;
    match side {
        Some(side) => println!("OK: {} {}", strategy.label(), side),
        None => println!("OK: {}", strategy.label()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_inputs_accepts_valid_combination() {
        let (strategy, side) =
            validate_inputs("MA Crossover", Some(10), Some(30), Some("Long")).unwrap();
        assert_eq!(strategy, Strategy::MaCrossover { short: 10, long: 30 });
        assert_eq!(side, Some(Side::Long));
    }

    #[test]
    fn validate_inputs_rejects_bad_side() {
        let err = validate_inputs("Bollinger Bands", None, None, Some("Diagonal")).unwrap_err();
        assert!(matches!(err, BackstratError::InvalidSide { value } if value == "Diagonal"));
    }

    #[test]
    fn validate_inputs_checks_strategy_before_side() {
        let err = validate_inputs("Ichimoku", None, None, Some("Long")).unwrap_err();
        assert!(matches!(err, BackstratError::UnknownStrategy { .. }));
    }

    #[test]
    fn resolve_dir_prefers_flag_over_config() {
        let config = FileConfigAdapter::from_string("[data]\npath = /from/config\n").unwrap();
        let dir = resolve_dir(
            Some(PathBuf::from("/from/flag")),
            Some(&config),
            "data",
            "path",
            "data",
        );
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn resolve_dir_falls_back_to_config_then_default() {
        let config = FileConfigAdapter::from_string("[data]\npath = /from/config\n").unwrap();
        let dir = resolve_dir(None, Some(&config), "data", "path", "data");
        assert_eq!(dir, PathBuf::from("/from/config"));

        let dir = resolve_dir(None, None, "data", "path", "data");
        assert_eq!(dir, PathBuf::from("data"));
    }

    #[test]
    fn resolve_param_falls_back_to_config() {
        let config =
            FileConfigAdapter::from_string("[backtest]\nlower = 10\nhigher = 30\n").unwrap();
        assert_eq!(resolve_param(Some(5), Some(&config), "lower"), Some(5));
        assert_eq!(resolve_param(None, Some(&config), "lower"), Some(10));
        assert_eq!(resolve_param(None, Some(&config), "higher"), Some(30));
        assert_eq!(resolve_param(None, Some(&config), "missing"), None);
        assert_eq!(resolve_param(None, None, "lower"), None);
    }

    #[test]
    fn resolve_ticker_falls_back_to_config() {
        let config =
            FileConfigAdapter::from_string("[backtest]\nticker = BHP\n").unwrap();
        assert_eq!(
            resolve_ticker(Some("AAPL".to_string()), Some(&config)).unwrap(),
            "AAPL"
        );
        assert_eq!(resolve_ticker(None, Some(&config)).unwrap(), "BHP");

        let err = resolve_ticker(None, None).unwrap_err();
        assert!(matches!(
            err,
            BackstratError::ConfigMissing { section, key } if section == "backtest" && key == "ticker"
        ));
    }

    #[test]
    fn cli_parses_backtest_command() {
        let cli = Cli::parse_from([
            "backstrat", "backtest", "--ticker", "AAPL", "--position", "Long", "--strategy",
            "ma-crossover", "--lower", "10", "--higher", "30",
        ]);
        match cli.command {
            Command::Backtest {
                ticker,
                position,
                strategy,
                lower,
                higher,
                ..
            } => {
                assert_eq!(ticker.as_deref(), Some("AAPL"));
                assert_eq!(position, "Long");
                assert_eq!(strategy, "ma-crossover");
                assert_eq!(lower, Some(10));
                assert_eq!(higher, Some(30));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
