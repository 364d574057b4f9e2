use crate::config::PayoutLimits;
use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// A payout as submitted by a caller, before any rule has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayoutRequest {
    pub user_id: Option<String>,
    #[serde(deserialize_with = "deserialize_exact_decimal")]
    pub amount: Decimal,
    pub currency: Option<String>,
}

impl PayoutRequest {
    pub fn new(user_id: impl Into<String>, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            amount,
            currency: Some(currency.into()),
        }
    }

    /// Runs the stateless checks in order: user id, amount, currency.
    ///
    /// Only the first failing check is reported. The cumulative per-user limit
    /// depends on stored state and is checked by the service.
    pub fn validate(self, limits: &PayoutLimits) -> Result<Payout, ValidationError> {
        let user_id = UserId::parse(self.user_id)?;
        let amount = Amount::new(self.amount, limits.max_payout_amount)?;
        let currency = Currency::parse(self.currency.as_deref())?;
        Ok(Payout {
            user_id,
            amount,
            currency,
        })
    }
}

/// Parses the amount from its text form without going through `f64`.
///
/// Digits beyond what `Decimal` can hold are an error rather than being
/// rounded, so bound checks always see the value that was written.
fn deserialize_exact_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Decimal::from_str_exact(raw.trim()).map_err(|e| {
        serde::de::Error::custom(format!("invalid amount {raw:?}: {e}"))
    })
}

/// A user identifier known to be present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn parse(value: Option<String>) -> Result<Self, ValidationError> {
        match value {
            None => Err(ValidationError::MissingUserId),
            Some(id) if id.is_empty() => Err(ValidationError::EmptyUserId),
            Some(id) => Ok(Self(id)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A payout amount within `(0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal, max: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        if value > max {
            return Err(ValidationError::AmountAboveMaximum { max });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Currencies accepted for payouts. Codes match exactly, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Gbp];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }

    /// Comma separated list of accepted codes, e.g. `EUR, USD, GBP`.
    pub fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(Currency::code)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn parse(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            None | Some("") => Err(ValidationError::EmptyCurrency),
            Some(code) => code.parse(),
        }
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| ValidationError::UnsupportedCurrency {
                allowed: Self::supported_codes(),
            })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A payout that passed every stateless check.
///
/// Only obtainable through [`PayoutRequest::validate`], which is what allows
/// storage to accept it without re-checking anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    user_id: UserId,
    amount: Amount,
    currency: Currency,
}

impl Payout {
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}
