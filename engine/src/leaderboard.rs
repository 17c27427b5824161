//! Leaderboard builder
//!
//! Turns a fully populated [`HolderMetricsStore`] into the ranked, serialized
//! leaderboard. Integer fields are rendered as decimal strings so no precision
//! is lost across the JSON boundary; only `score` is a float.

use alloy::primitives::{hex, Address};
use serde::Serialize;

use crate::{
    config::ScoringConfig,
    metrics::{HolderMetrics, HolderMetricsStore},
    scoring::{HolderScoreCalculator, HolderScoreResult, Modifier},
};

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub address: String,
    pub balance: String,
    pub total_received: String,
    pub total_sent: String,
    pub total_sold: String,
    pub total_profit_eth: String,
    pub time_weighted_balance: String,
    pub historical_high_balance: String,
    pub score: f64,
    pub is_diamond_hands: bool,
    pub is_paper_hands: bool,
    #[serde(rename = "isOG")]
    pub is_og: bool,
}

impl LeaderboardEntry {
    pub fn new(address: &Address, metrics: &HolderMetrics, score: f64) -> Self {
        Self {
            address: format_address(address),
            balance: metrics.balance.to_string(),
            total_received: metrics.total_received.to_string(),
            total_sent: metrics.total_sent.to_string(),
            total_sold: metrics.total_sold.to_string(),
            total_profit_eth: metrics.total_profit_eth.to_string(),
            time_weighted_balance: metrics.time_weighted_balance.to_string(),
            historical_high_balance: metrics.historical_high_balance.to_string(),
            score,
            is_diamond_hands: metrics.is_diamond_hands(),
            is_paper_hands: metrics.is_paper_hands(),
            is_og: metrics.is_og,
        }
    }
}

/// How a holder's score was reached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub modifiers: Vec<Modifier>,
}

impl From<HolderScoreResult> for ScoreBreakdown {
    fn from(result: HolderScoreResult) -> Self {
        Self {
            base: result.base,
            modifiers: result.modifiers,
        }
    }
}

/// A leaderboard row together with its score breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolderBreakdown {
    pub holder: LeaderboardEntry,
    pub breakdown: ScoreBreakdown,
}

/// Lowercase `0x`-prefixed hex
pub fn format_address(address: &Address) -> String {
    hex::encode_prefixed(address)
}

/// Filter, score and rank every holder in the store.
///
/// Holders with no balance and no transfer activity are dropped. Equal scores
/// are ordered by address so the output is deterministic.
pub fn build_leaderboard(store: &HolderMetricsStore, config: &ScoringConfig) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = store
        .iter()
        .filter(|(_, metrics)| metrics.has_activity())
        .map(|(address, metrics)| {
            let result = HolderScoreCalculator::calculate(metrics, config);
            LeaderboardEntry::new(address, metrics, result.score)
        })
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.address.cmp(&b.address))
    });

    entries
}

/// Leaderboard row and breakdown for one holder, if it would be listed
pub fn build_holder_breakdown(
    store: &HolderMetricsStore,
    address: &Address,
    config: &ScoringConfig,
) -> Option<HolderBreakdown> {
    let metrics = store.get(address).filter(|metrics| metrics.has_activity())?;
    let result = HolderScoreCalculator::calculate(metrics, config);

    Some(HolderBreakdown {
        holder: LeaderboardEntry::new(address, metrics, result.score),
        breakdown: result.into(),
    })
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use serde_json::json;

    use super::*;

    fn store_with(holders: Vec<(Address, HolderMetrics)>) -> HolderMetricsStore {
        let mut store = HolderMetricsStore::new();
        for (address, metrics) in holders {
            *store.holder_mut(address) = metrics;
        }
        store
    }

    fn holding(balance: i64) -> HolderMetrics {
        let mut metrics = HolderMetrics::default();
        metrics.receive(&BigInt::from(balance), 0);
        metrics.time_weighted_balance = BigInt::from(balance * 100);
        metrics
    }

    #[test]
    fn test_serialized_shape() {
        let address = Address::repeat_byte(0xab);
        let mut metrics = holding(1_000);
        metrics.total_profit_eth = BigInt::from(-25);
        metrics.is_og = true;

        let entry = LeaderboardEntry::new(&address, &metrics, 12.5);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            value,
            json!({
                "address": "0xabababababababababababababababababababab",
                "balance": "1000",
                "totalReceived": "1000",
                "totalSent": "0",
                "totalSold": "0",
                "totalProfitEth": "-25",
                "timeWeightedBalance": "100000",
                "historicalHighBalance": "1000",
                "score": 12.5,
                "isDiamondHands": true,
                "isPaperHands": false,
                "isOG": true
            })
        );
    }

    #[test]
    fn test_zero_activity_is_excluded() {
        let active = Address::repeat_byte(0x01);
        let seller_only = Address::repeat_byte(0x02);

        let mut sold = HolderMetrics::default();
        sold.total_sold = BigInt::from(500);

        let store = store_with(vec![(active, holding(10)), (seller_only, sold)]);
        let leaderboard = build_leaderboard(&store, &ScoringConfig::default());

        assert_eq!(leaderboard.len(), 1);
        assert_eq!(leaderboard[0].address, format_address(&active));
        assert!(build_holder_breakdown(&store, &seller_only, &ScoringConfig::default()).is_none());
    }

    #[test]
    fn test_sorted_by_score_then_address() {
        let small = Address::repeat_byte(0x05);
        let big = Address::repeat_byte(0x09);
        let twin_a = Address::repeat_byte(0x03);
        let twin_b = Address::repeat_byte(0x04);

        let store = store_with(vec![
            (small, holding(10)),
            (twin_b, holding(1_000)),
            (big, holding(1_000_000)),
            (twin_a, holding(1_000)),
        ]);
        let leaderboard = build_leaderboard(&store, &ScoringConfig::default());

        let order: Vec<String> = leaderboard.iter().map(|e| e.address.clone()).collect();
        assert_eq!(
            order,
            vec![
                format_address(&big),
                format_address(&twin_a),
                format_address(&twin_b),
                format_address(&small),
            ]
        );

        for pair in leaderboard.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_holder_breakdown() {
        let address = Address::repeat_byte(0x42);
        let store = store_with(vec![(address, holding(99))]);

        let breakdown = build_holder_breakdown(&store, &address, &ScoringConfig::default()).unwrap();

        assert_eq!(breakdown.holder.address, format_address(&address));
        assert_eq!(breakdown.breakdown.modifiers.len(), 1);
        assert_eq!(breakdown.breakdown.modifiers[0].name, "diamond_hands");
        assert!(breakdown.holder.score > breakdown.breakdown.base);
    }
}
