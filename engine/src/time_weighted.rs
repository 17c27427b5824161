//! Time-weighted balance integrator
//!
//! Integrates each holder's balance history over time: every snapshot's balance
//! is weighted by how long it stood, and the last snapshot stands until `now`.
//! `now` is always passed in; this module never reads the clock.

use num_bigint::BigInt;

use crate::metrics::{BalanceSnapshot, HolderMetricsStore};

/// Integrate a balance history up to `now` (unix seconds).
///
/// Snapshots are ordered by timestamp with a stable sort, so same-second legs
/// keep their processing order. A `now` earlier than the last snapshot is not
/// clamped and yields a negative tail.
pub fn time_weighted_balance(history: &[BalanceSnapshot], now: i64) -> BigInt {
    let mut ordered: Vec<&BalanceSnapshot> = history.iter().collect();
    ordered.sort_by_key(|snapshot| snapshot.timestamp);

    let mut total: BigInt = ordered
        .windows(2)
        .map(|pair| &pair[0].balance * (pair[1].timestamp - pair[0].timestamp))
        .sum();

    if let Some(last) = ordered.last() {
        total += &last.balance * (now - last.timestamp);
    }

    total
}

/// Fill in `time_weighted_balance` for every holder in the store
pub fn integrate_time_weighted_balances(store: &mut HolderMetricsStore, now: i64) {
    for (_, holder) in store.iter_mut() {
        holder.time_weighted_balance = time_weighted_balance(&holder.balance_history, now);
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;
    use num_traits::Zero;

    use super::*;

    fn snapshot(timestamp: i64, balance: i64) -> BalanceSnapshot {
        BalanceSnapshot {
            timestamp,
            balance: BigInt::from(balance),
        }
    }

    #[test]
    fn test_empty_history() {
        assert!(time_weighted_balance(&[], 1_000).is_zero());
    }

    #[test]
    fn test_single_snapshot_runs_until_now() {
        let history = vec![snapshot(10, 5)];
        assert_eq!(time_weighted_balance(&history, 20), BigInt::from(50));
        assert!(time_weighted_balance(&history, 10).is_zero());
    }

    #[test]
    fn test_adjacent_pairs_and_tail() {
        let history = vec![snapshot(0, 100), snapshot(10, 70)];
        // 100 * 10 + 70 * 20
        assert_eq!(time_weighted_balance(&history, 30), BigInt::from(2_400));
    }

    #[test]
    fn test_unsorted_history_with_ties_is_stable() {
        let history = vec![snapshot(10, 5), snapshot(0, 100), snapshot(10, 7)];
        // Sorted: (0, 100), (10, 5), (10, 7) -> 100 * 10 + 5 * 0 + 7 * 10
        assert_eq!(time_weighted_balance(&history, 20), BigInt::from(1_070));
        // Input order is left untouched
        assert_eq!(history[0], snapshot(10, 5));
    }

    #[test]
    fn test_now_before_last_snapshot_is_not_clamped() {
        let history = vec![snapshot(100, 4)];
        assert_eq!(time_weighted_balance(&history, 90), BigInt::from(-40));
    }

    #[test]
    fn test_large_balances_do_not_overflow() {
        let whale = BigInt::parse_bytes(b"1000000000000000000000000000", 10).unwrap();
        let history = vec![BalanceSnapshot {
            timestamp: 0,
            balance: whale.clone(),
        }];

        let week = 7 * 24 * 3_600;
        assert_eq!(time_weighted_balance(&history, week), whale * week);
    }

    #[test]
    fn test_integrate_store() {
        let mut store = HolderMetricsStore::new();
        let holder = Address::repeat_byte(0x11);
        store.holder_mut(holder).receive(&BigInt::from(10), 100);
        store.holder_mut(holder).send(&BigInt::from(4), 150);

        integrate_time_weighted_balances(&mut store, 200);

        // 10 * 50 + 6 * 50
        assert_eq!(
            store.get(&holder).unwrap().time_weighted_balance,
            BigInt::from(800)
        );
    }
}
