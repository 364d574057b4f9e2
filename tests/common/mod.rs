#![allow(dead_code)]

use payout_service::domain::payout::PayoutRequest;
use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

pub const VALID_CURRENCIES: [&str; 3] = ["EUR", "USD", "GBP"];

pub fn random_user_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}

/// Random amount with two decimal places in `[min_cents, max_cents] / 100`.
pub fn random_amount(min_cents: i64, max_cents: i64) -> Decimal {
    Decimal::new(rand::thread_rng().gen_range(min_cents..=max_cents), 2)
}

pub fn random_currency() -> &'static str {
    VALID_CURRENCIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("EUR")
}

/// A request that passes every stateless check.
pub fn valid_request() -> PayoutRequest {
    PayoutRequest::new(random_user_id(), random_amount(1, 3000), random_currency())
}

pub fn request_for(user_id: &str, amount: Decimal) -> PayoutRequest {
    PayoutRequest::new(user_id, amount, random_currency())
}
