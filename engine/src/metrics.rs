//! Holder Metrics Store
//!
//! Request-scoped accumulator keyed by holder address. A store is built fresh
//! for every leaderboard computation and dropped once the result is serialized.

use std::collections::{hash_map, HashMap};

use alloy::primitives::Address;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Balance observed right after a transfer leg was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSnapshot {
    /// Unix seconds
    pub timestamp: i64,
    pub balance: BigInt,
}

/// Accumulated activity for a single holder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolderMetrics {
    /// Always `total_received - total_sent`
    pub balance: BigInt,
    pub total_received: BigInt,
    pub total_sent: BigInt,
    pub total_sold: BigInt,
    /// Realized proceeds minus cost basis, in the quote asset's base units
    pub total_profit_eth: BigInt,
    pub time_weighted_balance: BigInt,
    pub has_bought: bool,
    pub is_og: bool,
    pub historical_high_balance: BigInt,
    /// Append-only, one entry per transfer leg
    pub balance_history: Vec<BalanceSnapshot>,
}

impl HolderMetrics {
    /// Apply an incoming transfer leg
    pub fn receive(&mut self, value: &BigInt, timestamp: i64) {
        self.balance += value;
        self.total_received += value;

        if self.balance > self.historical_high_balance {
            self.historical_high_balance = self.balance.clone();
        }

        self.record_snapshot(timestamp);
    }

    /// Apply an outgoing transfer leg. The peak only tracks growth.
    pub fn send(&mut self, value: &BigInt, timestamp: i64) {
        self.balance -= value;
        self.total_sent += value;

        self.record_snapshot(timestamp);
    }

    /// Mark the holder as having received directly from the deployer
    pub fn mark_og(&mut self) {
        self.has_bought = true;
        self.is_og = true;
    }

    fn record_snapshot(&mut self, timestamp: i64) {
        self.balance_history.push(BalanceSnapshot {
            timestamp,
            balance: self.balance.clone(),
        });
    }

    /// Any recorded transfer activity
    pub fn has_activity(&self) -> bool {
        self.balance.is_positive()
            || self.total_received.is_positive()
            || self.total_sent.is_positive()
    }

    /// Never sold
    pub fn is_diamond_hands(&self) -> bool {
        self.total_sold.is_zero()
    }

    /// Sold and holds nothing
    pub fn is_paper_hands(&self) -> bool {
        self.balance.is_zero() && self.total_sold.is_positive()
    }
}

/// Address → metrics map owned by a single computation
#[derive(Debug, Default)]
pub struct HolderMetricsStore {
    holders: HashMap<Address, HolderMetrics>,
}

impl HolderMetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a holder's metrics, creating an empty entry on first reference
    pub fn holder_mut(&mut self, address: Address) -> &mut HolderMetrics {
        debug_assert!(!address.is_zero(), "zero address is never a holder");
        self.holders.entry(address).or_default()
    }

    pub fn get(&self, address: &Address) -> Option<&HolderMetrics> {
        self.holders.get(address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.holders.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Address, HolderMetrics> {
        self.holders.iter()
    }

    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, Address, HolderMetrics> {
        self.holders.iter_mut()
    }
}

impl IntoIterator for HolderMetricsStore {
    type Item = (Address, HolderMetrics);
    type IntoIter = hash_map::IntoIter<Address, HolderMetrics>;

    fn into_iter(self) -> Self::IntoIter {
        self.holders.into_iter()
    }
}
