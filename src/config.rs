//! Business thresholds applied by the payout service.

use crate::error::{PayoutError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Largest amount a single payout may carry (inclusive).
pub const MAX_PAYOUT_AMOUNT: Decimal = dec!(30);

/// Largest cumulative amount a single user may be paid out (inclusive).
pub const USER_TOTAL_LIMIT: Decimal = dec!(100);

/// Numeric limits enforced during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutLimits {
    pub max_payout_amount: Decimal,
    pub user_total_limit: Decimal,
}

impl PayoutLimits {
    /// Builds a custom set of limits. Both values must be strictly positive.
    ///
    /// Values are normalized so `30.0` is reported as `30` in rejections.
    pub fn new(max_payout_amount: Decimal, user_total_limit: Decimal) -> Result<Self> {
        if max_payout_amount <= Decimal::ZERO {
            return Err(PayoutError::InvalidConfig(format!(
                "max payout amount must be positive, got {max_payout_amount}"
            )));
        }
        if user_total_limit <= Decimal::ZERO {
            return Err(PayoutError::InvalidConfig(format!(
                "user total limit must be positive, got {user_total_limit}"
            )));
        }
        Ok(Self {
            max_payout_amount: max_payout_amount.normalize(),
            user_total_limit: user_total_limit.normalize(),
        })
    }
}

impl Default for PayoutLimits {
    fn default() -> Self {
        Self {
            max_payout_amount: MAX_PAYOUT_AMOUNT,
            user_total_limit: USER_TOTAL_LIMIT,
        }
    }
}
