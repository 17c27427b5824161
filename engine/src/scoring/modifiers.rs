//! Score modifiers
//!
//! Each modifier is a pure rule that either yields a multiplier or nothing.
//! [`MODIFIER_CHAIN`] fixes the order they are folded into the base score.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use serde::Serialize;

use crate::{config::ScoringConfig, metrics::HolderMetrics};

/// A multiplier applied to the base score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Modifier {
    pub name: &'static str,
    pub factor: f64,
}

/// Rule deciding whether a modifier applies to a holder
pub type ModifierRule = fn(&HolderMetrics, &ScoringConfig) -> Option<Modifier>;

/// Modifiers in application order
pub const MODIFIER_CHAIN: [ModifierRule; 4] = [paper_hands, diamond_hands, og_bonus, peak_dump];

/// Sold and holds nothing
pub fn paper_hands(holder: &HolderMetrics, config: &ScoringConfig) -> Option<Modifier> {
    holder.is_paper_hands().then_some(Modifier {
        name: "paper_hands",
        factor: config.paper_hands_penalty,
    })
}

/// Never sold
pub fn diamond_hands(holder: &HolderMetrics, config: &ScoringConfig) -> Option<Modifier> {
    holder.is_diamond_hands().then_some(Modifier {
        name: "diamond_hands",
        factor: config.diamond_hands_bonus,
    })
}

/// Received directly from the deployer
pub fn og_bonus(holder: &HolderMetrics, config: &ScoringConfig) -> Option<Modifier> {
    holder.is_og.then_some(Modifier {
        name: "og",
        factor: config.og_bonus,
    })
}

/// Penalize holders who have fallen far below their peak balance
pub fn peak_dump(holder: &HolderMetrics, config: &ScoringConfig) -> Option<Modifier> {
    let permille = peak_permille(&holder.balance, &holder.historical_high_balance)?;
    let tier = DumpTier::from_permille(permille)?;

    Some(Modifier {
        name: tier.name(),
        factor: tier.factor(config),
    })
}

/// Current balance as thousandths of the peak, truncated toward zero.
///
/// `None` when there is no positive peak to compare against.
pub fn peak_permille(balance: &BigInt, historical_high: &BigInt) -> Option<i64> {
    if !historical_high.is_positive() {
        return None;
    }

    // balance <= peak, so this only fails for absurdly negative balances
    let permille = (balance * 1000u32 / historical_high).to_i64().unwrap_or(i64::MIN);
    Some(permille)
}

/// Drawdown tiers from the historical high
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpTier {
    /// Below 10% of peak
    Major,
    /// Below 25% of peak
    Significant,
    /// Below 50% of peak
    Moderate,
}

impl DumpTier {
    /// First matching tier, strict less-than at each boundary
    pub fn from_permille(permille: i64) -> Option<Self> {
        match permille {
            p if p < 100 => Some(Self::Major),
            p if p < 250 => Some(Self::Significant),
            p if p < 500 => Some(Self::Moderate),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "major_dump",
            Self::Significant => "significant_dump",
            Self::Moderate => "moderate_dump",
        }
    }

    pub fn factor(&self, config: &ScoringConfig) -> f64 {
        match self {
            Self::Major => config.dump_penalties.major,
            Self::Significant => config.dump_penalties.significant,
            Self::Moderate => config.dump_penalties.moderate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(balance: i64, high: i64, sold: i64, is_og: bool) -> HolderMetrics {
        HolderMetrics {
            balance: BigInt::from(balance),
            historical_high_balance: BigInt::from(high),
            total_sold: BigInt::from(sold),
            is_og,
            ..Default::default()
        }
    }

    fn applied(holder: &HolderMetrics) -> Vec<&'static str> {
        let config = ScoringConfig::default();
        MODIFIER_CHAIN
            .iter()
            .filter_map(|rule| rule(holder, &config))
            .map(|m| m.name)
            .collect()
    }

    #[test]
    fn test_chain_order() {
        // Dumped OG that sold out: every rule but diamond hands fires, in chain order
        assert_eq!(
            applied(&holder(0, 500, 500, true)),
            vec!["paper_hands", "og", "major_dump"]
        );
    }

    #[test]
    fn test_paper_and_diamond_are_exclusive() {
        assert_eq!(applied(&holder(0, 100, 100, false)), vec!["paper_hands", "major_dump"]);
        assert_eq!(applied(&holder(100, 100, 0, false)), vec!["diamond_hands"]);
        // Empty wallet that never sold: neither flag is a penalty
        assert_eq!(applied(&holder(0, 0, 0, false)), vec!["diamond_hands"]);
    }

    #[test]
    fn test_og_bonus() {
        assert_eq!(applied(&holder(100, 100, 5, true)), vec!["og"]);
    }

    #[test]
    fn test_dump_tier_boundaries() {
        assert_eq!(DumpTier::from_permille(-5), Some(DumpTier::Major));
        assert_eq!(DumpTier::from_permille(99), Some(DumpTier::Major));
        assert_eq!(DumpTier::from_permille(100), Some(DumpTier::Significant));
        assert_eq!(DumpTier::from_permille(249), Some(DumpTier::Significant));
        assert_eq!(DumpTier::from_permille(250), Some(DumpTier::Moderate));
        assert_eq!(DumpTier::from_permille(499), Some(DumpTier::Moderate));
        assert_eq!(DumpTier::from_permille(500), None);
        assert_eq!(DumpTier::from_permille(1000), None);
    }

    #[test]
    fn test_exactly_ten_percent_is_not_major() {
        let config = ScoringConfig::default();

        let at_boundary = peak_dump(&holder(10, 100, 1, false), &config).unwrap();
        assert_eq!(at_boundary.name, "significant_dump");
        assert_eq!(at_boundary.factor, 0.8);

        let below = peak_dump(&holder(99, 1_000, 1, false), &config).unwrap();
        assert_eq!(below.name, "major_dump");
        assert_eq!(below.factor, 0.6);
    }

    #[test]
    fn test_ratio_truncates_to_three_decimals() {
        // 0.0999... truncates to 0.099
        assert_eq!(peak_permille(&BigInt::from(999), &BigInt::from(10_000)), Some(99));
        // 0.4999 truncates to 0.499
        assert_eq!(peak_permille(&BigInt::from(4_999), &BigInt::from(10_000)), Some(499));
    }

    #[test]
    fn test_zero_peak_has_no_tier() {
        let config = ScoringConfig::default();
        assert_eq!(peak_permille(&BigInt::from(0), &BigInt::from(0)), None);
        assert!(peak_dump(&holder(-10, 0, 0, false), &config).is_none());
    }
}
