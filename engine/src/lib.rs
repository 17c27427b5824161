//! Holder leaderboard engine
//!
//! Recomputes the holder leaderboard from the full transfer and swap record
//! sets. Every call builds its own [`HolderMetricsStore`]; nothing is shared
//! between computations.
//!
//! Stages, in order:
//! 1. Transfer aggregation (balances, peaks, OG provenance, balance history)
//! 2. Swap processing (sold totals, realized profit)
//! 3. Time-weighted balance integration up to `now`
//! 4. Scoring and ranking

use alloy::primitives::Address;
use leaderboard_db::{SwapRecord, TransferRecord};

pub mod config;
pub mod error;
pub mod handlers;
pub mod leaderboard;
pub mod metrics;
pub mod scoring;
pub mod time_weighted;

pub use config::{EngineConfig, ScoringConfig};
pub use error::EngineError;
pub use leaderboard::{HolderBreakdown, LeaderboardEntry, ScoreBreakdown};
pub use metrics::{BalanceSnapshot, HolderMetrics, HolderMetricsStore};

/// Run aggregation and integration, leaving scoring to the caller.
///
/// `now` is unix seconds and must come from the caller so results are reproducible.
pub fn compute_holder_metrics(
    transfers: &[TransferRecord],
    swaps: &[SwapRecord],
    config: &EngineConfig,
    now: i64,
) -> HolderMetricsStore {
    let mut store = HolderMetricsStore::new();

    handlers::apply_transfers(transfers, config.deployer_address, &mut store);
    handlers::apply_swaps(swaps, &mut store);
    time_weighted::integrate_time_weighted_balances(&mut store, now);

    store
}

/// Compute the ranked leaderboard
pub fn compute_leaderboard(
    transfers: &[TransferRecord],
    swaps: &[SwapRecord],
    config: &EngineConfig,
    now: i64,
) -> Vec<LeaderboardEntry> {
    let store = compute_holder_metrics(transfers, swaps, config, now);
    let entries = leaderboard::build_leaderboard(&store, &config.scoring);

    tracing::info!(
        "Computed leaderboard: {} transfers, {} swaps, {} holders, {} ranked",
        transfers.len(),
        swaps.len(),
        store.len(),
        entries.len()
    );

    entries
}

/// Compute a single holder's leaderboard row and score breakdown
pub fn compute_holder_breakdown(
    transfers: &[TransferRecord],
    swaps: &[SwapRecord],
    config: &EngineConfig,
    now: i64,
    address: &Address,
) -> Option<HolderBreakdown> {
    let store = compute_holder_metrics(transfers, swaps, config, now);
    leaderboard::build_holder_breakdown(&store, address, &config.scoring)
}
