use super::payout::Payout;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Storage for accepted payouts.
///
/// Implementations never validate: anything handed to `store` has already
/// been accepted. Lookups for unknown users yield empty results, not errors.
#[async_trait]
pub trait PayoutStore: Send + Sync {
    async fn store(&self, payout: Payout);
    async fn user_total(&self, user_id: &str) -> Decimal;
    async fn payouts_for_user(&self, user_id: &str) -> Vec<Payout>;
}

pub type PayoutStoreBox = Box<dyn PayoutStore>;
