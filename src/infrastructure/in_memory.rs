use crate::domain::payout::Payout;
use crate::domain::ports::PayoutStore;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for accepted payouts.
///
/// Payouts are kept in insertion order in an `Arc<RwLock<Vec<Payout>>>`.
/// Clones share the same collection; every `new()` starts empty, so separate
/// services never see each other's records.
#[derive(Default, Clone)]
pub struct InMemoryPayoutStore {
    payouts: Arc<RwLock<Vec<Payout>>>,
}

impl InMemoryPayoutStore {
    /// Creates a new, empty in-memory payout store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of payouts held across all users.
    pub async fn len(&self) -> usize {
        self.payouts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.payouts.read().await.is_empty()
    }
}

#[async_trait]
impl PayoutStore for InMemoryPayoutStore {
    async fn store(&self, payout: Payout) {
        let mut payouts = self.payouts.write().await;
        payouts.push(payout);
    }

    async fn user_total(&self, user_id: &str) -> Decimal {
        let payouts = self.payouts.read().await;
        payouts
            .iter()
            .filter(|p| p.user_id().as_str() == user_id)
            .map(|p| p.amount().value())
            .sum()
    }

    async fn payouts_for_user(&self, user_id: &str) -> Vec<Payout> {
        let payouts = self.payouts.read().await;
        payouts
            .iter()
            .filter(|p| p.user_id().as_str() == user_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayoutLimits;
    use crate::domain::payout::PayoutRequest;
    use rust_decimal_macros::dec;

    fn payout(user_id: &str, amount: Decimal, currency: &str) -> Payout {
        PayoutRequest::new(user_id, amount, currency)
            .validate(&PayoutLimits::default())
            .unwrap()
    }

    #[tokio::test]
    async fn test_store_and_retrieve() {
        let store = InMemoryPayoutStore::new();
        let p = payout("alice", dec!(12.34), "EUR");

        store.store(p.clone()).await;

        let payouts = store.payouts_for_user("alice").await;
        assert_eq!(payouts, vec![p]);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_zero_total_for_unknown_user() {
        let store = InMemoryPayoutStore::new();
        assert_eq!(store.user_total("nobody").await, Decimal::ZERO);

        store.store(payout("alice", dec!(10), "USD")).await;
        assert_eq!(store.user_total("nobody").await, Decimal::ZERO);
        assert!(store.payouts_for_user("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn test_total_over_multiple_payouts_and_currencies() {
        let store = InMemoryPayoutStore::new();
        store.store(payout("multi", dec!(10.0), "USD")).await;
        store.store(payout("multi", dec!(15.50), "EUR")).await;
        store.store(payout("multi", dec!(20.25), "GBP")).await;

        assert_eq!(store.user_total("multi").await, dec!(45.75));
        assert_eq!(store.payouts_for_user("multi").await.len(), 3);
    }

    #[tokio::test]
    async fn test_payouts_kept_in_insertion_order() {
        let store = InMemoryPayoutStore::new();
        let first = payout("alice", dec!(1), "EUR");
        let other = payout("bob", dec!(2), "EUR");
        let second = payout("alice", dec!(3), "GBP");

        store.store(first.clone()).await;
        store.store(other).await;
        store.store(second.clone()).await;

        assert_eq!(store.payouts_for_user("alice").await, vec![first, second]);
    }

    #[tokio::test]
    async fn test_users_tracked_independently() {
        let store = InMemoryPayoutStore::new();
        store.store(payout("user1", dec!(25), "EUR")).await;
        store.store(payout("user2", dec!(30), "EUR")).await;
        store.store(payout("user2", dec!(30), "USD")).await;

        assert_eq!(store.user_total("user1").await, dec!(25));
        assert_eq!(store.user_total("user2").await, dec!(60));
        assert_eq!(store.payouts_for_user("user1").await.len(), 1);
        assert_eq!(store.payouts_for_user("user2").await.len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_state_but_new_stores_do_not() {
        let store = InMemoryPayoutStore::new();
        let shared = store.clone();
        let fresh = InMemoryPayoutStore::new();

        store.store(payout("alice", dec!(5), "EUR")).await;

        assert_eq!(shared.user_total("alice").await, dec!(5));
        assert!(fresh.is_empty().await);
    }
}
