//! Swap processor
//!
//! Applies pool Swap records to sold totals and realized profit.
//! `amount0` is the tracked token: positive means it went into the pool (a sell),
//! negative means it came out (a buy).

use leaderboard_db::SwapRecord;
use num_bigint::BigInt;
use num_traits::Signed;

use crate::metrics::HolderMetricsStore;

use super::in_chain_order;

/// Implied decimals of `effective_price`
pub const PRICE_DECIMALS: u32 = 18;

/// Value of the opposite leg at the swap's effective price.
///
/// Integer division truncates toward zero, so sub-unit remainders are dropped.
/// That loss is accepted: profit is reported in whole base units.
pub fn quote_value(amount1: &BigInt, effective_price: &BigInt) -> BigInt {
    amount1.abs() * effective_price / BigInt::from(10u8).pow(PRICE_DECIMALS)
}

/// Apply a single swap. Zero `amount0` swaps are ignored, and the zero
/// address is never credited on either leg.
pub fn apply_swap(swap: &SwapRecord, store: &mut HolderMetricsStore) {
    if swap.amount0.is_positive() && !swap.sender.is_zero() {
        let holder = store.holder_mut(swap.sender);
        holder.total_sold += &swap.amount0;

        // Proceeds only count after a deployer transfer or an earlier buy set `has_bought`
        if holder.has_bought {
            holder.total_profit_eth += quote_value(&swap.amount1, &swap.effective_price);
        }
    } else if swap.amount0.is_negative() && !swap.recipient.is_zero() {
        let holder = store.holder_mut(swap.recipient);
        holder.has_bought = true;
        holder.total_profit_eth -= quote_value(&swap.amount1, &swap.effective_price);
    }
}

/// Apply every swap in chain order. Must run after the transfer aggregator.
pub fn apply_swaps(swaps: &[SwapRecord], store: &mut HolderMetricsStore) {
    for swap in in_chain_order(swaps, |s| (s.block_number, s.log_index)) {
        apply_swap(swap, store);
    }

    tracing::debug!("Applied {} swaps across {} holders", swaps.len(), store.len());
}
