//! Holder Score Calculator
//!
//! Ranks holders by conviction. Larger and longer-held balances score higher,
//! selling is penalized, and the modifier chain adjusts for trading behavior.
//!
//! Score Components:
//! - Base: `log10(balance + 1) * 40 + log10(timeWeightedBalance + 1) * 40 - log10(totalSold + 1) * 20`
//! - Modifiers: paper hands (0.5x), diamond hands (1.1x), OG (1.15x), dump from peak (0.6x / 0.8x / 0.9x)

use num_bigint::BigInt;

use crate::{config::ScoringConfig, metrics::HolderMetrics};

use super::{approx_log10, Modifier, MODIFIER_CHAIN};

/// Result of scoring one holder
#[derive(Debug, Clone, PartialEq)]
pub struct HolderScoreResult {
    /// Final score, rounded to 2 decimals
    pub score: f64,
    /// Unrounded score before any modifier
    pub base: f64,
    /// Modifiers that fired, in application order
    pub modifiers: Vec<Modifier>,
}

/// Holder score calculator
pub struct HolderScoreCalculator;

impl HolderScoreCalculator {
    /// Score a holder whose time-weighted balance has already been integrated
    pub fn calculate(holder: &HolderMetrics, config: &ScoringConfig) -> HolderScoreResult {
        let base = Self::base_score(holder, config);

        let modifiers: Vec<Modifier> = MODIFIER_CHAIN
            .iter()
            .filter_map(|rule| rule(holder, config))
            .collect();

        let score = modifiers.iter().fold(base, |score, modifier| score * modifier.factor);

        HolderScoreResult {
            score: Self::round_score(score),
            base,
            modifiers,
        }
    }

    /// Log-weighted base score. Uses the reduced-precision logarithm, so the
    /// result is an approximation.
    pub fn base_score(holder: &HolderMetrics, config: &ScoringConfig) -> f64 {
        let one = BigInt::from(1u8);

        approx_log10(&(&holder.balance + &one)) * config.balance_weight
            + approx_log10(&(&holder.time_weighted_balance + &one)) * config.time_weighted_weight
            - approx_log10(&(&holder.total_sold + &one)) * config.sold_penalty_weight
    }

    /// Round to 2 decimals, halves away from zero
    pub fn round_score(score: f64) -> f64 {
        (score * 100.0).round() / 100.0
    }
}
