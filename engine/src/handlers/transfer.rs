//! Transfer aggregator
//!
//! Applies ERC20 Transfer records to holder balances:
//! - Credit the recipient and track their peak balance
//! - Debit the sender
//! - Flag recipients of deployer transfers as OG
//! - Append a balance snapshot for every leg

use alloy::primitives::Address;
use leaderboard_db::TransferRecord;

use crate::metrics::HolderMetricsStore;

use super::in_chain_order;

/// Apply a single transfer. Mints and burns only touch the non-zero side.
pub fn apply_transfer(transfer: &TransferRecord, deployer: Address, store: &mut HolderMetricsStore) {
    if !transfer.to.is_zero() {
        let holder = store.holder_mut(transfer.to);
        holder.receive(&transfer.value, transfer.timestamp);

        if transfer.from == deployer {
            holder.mark_og();
        }
    }

    if !transfer.from.is_zero() {
        store
            .holder_mut(transfer.from)
            .send(&transfer.value, transfer.timestamp);
    }
}

/// Apply every transfer exactly once, in chain order.
///
/// The input is re-sorted by `(block_number, log_index)` before processing; peak
/// balances and the balance history are only meaningful in that order.
pub fn apply_transfers(transfers: &[TransferRecord], deployer: Address, store: &mut HolderMetricsStore) {
    for transfer in in_chain_order(transfers, |t| (t.block_number, t.log_index)) {
        apply_transfer(transfer, deployer, store);
    }

    tracing::debug!(
        "Applied {} transfers across {} holders",
        transfers.len(),
        store.len()
    );
}
