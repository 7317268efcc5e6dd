//! Core domain types and the backtest engine.

pub mod bar;
pub mod error;
pub mod strategy;
pub mod indicator;
pub mod signal;
pub mod position;
pub mod ledger;
pub mod backtest;
