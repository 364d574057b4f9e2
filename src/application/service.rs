use crate::config::PayoutLimits;
use crate::domain::payout::{Payout, PayoutRequest};
use crate::domain::ports::PayoutStoreBox;
use crate::error::ValidationError;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing::debug;

/// Validates payout requests and records the accepted ones.
///
/// Checks run in a fixed order (user id, amount, currency, cumulative user
/// total) and the first failure is returned. Storage is written only when
/// every check passes.
pub struct PayoutService {
    store: PayoutStoreBox,
    limits: PayoutLimits,
    // Held across read-total, compare and store.
    commit: Mutex<()>,
}

impl PayoutService {
    /// Creates a service with the default limits.
    pub fn new(store: PayoutStoreBox) -> Self {
        Self::with_limits(store, PayoutLimits::default())
    }

    pub fn with_limits(store: PayoutStoreBox, limits: PayoutLimits) -> Self {
        Self {
            store,
            limits,
            commit: Mutex::new(()),
        }
    }

    /// Validates the request and stores it if every rule passes.
    ///
    /// Returns `Ok(true)` on acceptance. A rejection is always an error and
    /// leaves storage untouched.
    pub async fn process_payout(&self, request: PayoutRequest) -> Result<bool, ValidationError> {
        let payout = request.validate(&self.limits).inspect_err(|e| {
            debug!(reason = %e, "payout rejected");
        })?;

        let _guard = self.commit.lock().await;
        self.check_user_total(&payout).await?;

        debug!(
            user_id = %payout.user_id(),
            amount = %payout.amount().value(),
            currency = %payout.currency(),
            "payout accepted"
        );
        self.store.store(payout).await;
        Ok(true)
    }

    async fn check_user_total(&self, payout: &Payout) -> Result<(), ValidationError> {
        let limit = self.limits.user_total_limit;
        let current_total = self.store.user_total(payout.user_id().as_str()).await;

        match current_total.checked_add(payout.amount().value()) {
            Some(new_total) if new_total <= limit => Ok(()),
            _ => {
                debug!(
                    user_id = %payout.user_id(),
                    %current_total,
                    amount = %payout.amount().value(),
                    "payout rejected: user total limit exceeded"
                );
                Err(ValidationError::UserTotalLimitExceeded { limit })
            }
        }
    }

    /// Sum of all accepted payouts for the user, zero if there are none.
    pub async fn user_total(&self, user_id: &str) -> Decimal {
        self.store.user_total(user_id).await
    }

    /// Accepted payouts for the user in the order they were accepted.
    pub async fn payouts_for_user(&self, user_id: &str) -> Vec<Payout> {
        self.store.payouts_for_user(user_id).await
    }
}
