//! Record handlers
//!
//! Handlers fold the indexer's record streams into a [`HolderMetricsStore`].
//! Transfers must be applied before swaps: swap profit depends on the
//! `has_bought` flag set by deployer transfers.
//!
//! [`HolderMetricsStore`]: crate::metrics::HolderMetricsStore

pub mod swap;
pub mod transfer;

pub use swap::{apply_swap, apply_swaps};
pub use transfer::{apply_transfer, apply_transfers};

/// Position of a log in the chain: block height, then log index within the block
pub type ChainPosition = (u64, i32);

/// Stable chronological ordering of a record stream
fn in_chain_order<T, F>(records: &[T], position: F) -> Vec<&T>
where
    F: Fn(&T) -> ChainPosition,
{
    let mut ordered: Vec<&T> = records.iter().collect();
    ordered.sort_by_key(|record| position(record));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_order_is_stable() {
        // (block, log index, tag)
        let records = vec![(2, 0, 'a'), (1, 5, 'b'), (1, 1, 'c'), (2, 0, 'd')];
        let ordered: Vec<char> = in_chain_order(&records, |r| (r.0, r.1))
            .into_iter()
            .map(|r| r.2)
            .collect();

        assert_eq!(ordered, vec!['c', 'b', 'a', 'd']);
    }
}
