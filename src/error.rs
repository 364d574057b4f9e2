use rust_decimal::Decimal;
use thiserror::Error;

/// Reason a payout request was rejected.
///
/// The `Display` output of each variant is the message reported to callers,
/// so it must stay stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("userId is required")]
    MissingUserId,
    #[error("userId cannot be empty")]
    EmptyUserId,
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("amount must not exceed {max}")]
    AmountAboveMaximum { max: Decimal },
    #[error("currency cannot be empty")]
    EmptyCurrency,
    #[error("currency must be one of: {allowed}")]
    UnsupportedCurrency { allowed: String },
    #[error("user total limit of {limit} exceeded")]
    UserTotalLimitExceeded { limit: Decimal },
}

#[derive(Error, Debug)]
pub enum PayoutError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, PayoutError>;
