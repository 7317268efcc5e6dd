//! Domain error types.

/// Top-level error type for backstrat.
#[derive(Debug, thiserror::Error)]
pub enum BackstratError {
    #[error("invalid {field}: {reason}")]
    InvalidParameter { field: String, reason: String },

    #[error("unknown strategy '{name}'")]
    UnknownStrategy { name: String },

    #[error("invalid position '{value}', expected Long or Short")]
    InvalidSide { value: String },

    #[error("no price history available for {ticker}")]
    DataUnavailable { ticker: String },

    #[error("malformed price data: {reason}")]
    BadData { reason: String },

    /// Scanner/ledger desynchronization. Indicates a bug, not bad input;
    /// the run aborts and must not be retried.
    #[error("position ledger desync: {reason}")]
    Desync { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("trade log error: {0}")]
    TradeLog(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BackstratError {
    pub fn invalid_parameter(field: &str, reason: &str) -> Self {
        BackstratError::InvalidParameter {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<&BackstratError> for std::process::ExitCode {
    fn from(err: &BackstratError) -> Self {
        let code: u8 = match err {
            BackstratError::Io(_) | BackstratError::TradeLog(_) => 1,
            BackstratError::ConfigParse { .. } | BackstratError::ConfigMissing { .. } => 2,
            BackstratError::BadData { .. } => 3,
            BackstratError::InvalidParameter { .. }
            | BackstratError::UnknownStrategy { .. }
            | BackstratError::InvalidSide { .. } => 4,
            BackstratError::DataUnavailable { .. } => 5,
            BackstratError::Desync { .. } => 6,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_field() {
        let err = BackstratError::invalid_parameter("short_ma", "must be a positive integer");
        assert_eq!(
            err.to_string(),
            "invalid short_ma: must be a positive integer"
        );
    }

    #[test]
    fn data_unavailable_names_the_ticker() {
        let err = BackstratError::DataUnavailable {
            ticker: "AAPL".into(),
        };
        assert_eq!(err.to_string(), "no price history available for AAPL");
    }

    #[test]
    fn desync_is_distinct_from_validation() {
        let desync = BackstratError::Desync {
            reason: "open while a position is live".into(),
        };
        let invalid = BackstratError::InvalidSide {
            value: "Sideways".into(),
        };
        let a: std::process::ExitCode = (&desync).into();
        let b: std::process::ExitCode = (&invalid).into();
        assert_ne!(format!("{a:?}"), format!("{b:?}"));
    }
}
