//! Application layer containing the payout acceptance logic.
//!
//! This module defines the `PayoutService`, which validates submitted payouts
//! and is the only path through which payouts reach storage.

pub mod service;
