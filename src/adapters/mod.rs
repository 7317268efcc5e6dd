//! Concrete port implementations.

pub mod csv_data_adapter;
pub mod csv_trade_log;
pub mod file_config_adapter;
pub mod memory_trade_log;
