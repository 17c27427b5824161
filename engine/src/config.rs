//! Engine configuration
//!
//! The deployer address comes from the environment; scoring weights and
//! multipliers are fixed constants exposed through [`ScoringConfig::default`].

use std::{env, str::FromStr};

use alloy::primitives::Address;

use crate::error::EngineError;

pub mod defaults {
    use alloy::primitives::{address, Address};

    pub const DEPLOYER_ADDRESS: Address = address!("34919f7dd781e5cdbda923392dbc627add997a8f");

    pub const BALANCE_WEIGHT: f64 = 40.0;
    pub const TIME_WEIGHTED_WEIGHT: f64 = 40.0;
    pub const SOLD_PENALTY_WEIGHT: f64 = 20.0;

    pub const DIAMOND_HANDS_BONUS: f64 = 1.1;
    pub const OG_BONUS: f64 = 1.15;
    pub const PAPER_HANDS_PENALTY: f64 = 0.5;

    /// 90%+ drawdown from peak
    pub const MAJOR_DUMP_PENALTY: f64 = 0.6;
    /// 75%+ drawdown from peak
    pub const SIGNIFICANT_DUMP_PENALTY: f64 = 0.8;
    /// 50%+ drawdown from peak
    pub const MODERATE_DUMP_PENALTY: f64 = 0.9;
}

/// Multipliers applied when a holder has dumped from their peak balance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DumpPenalties {
    pub major: f64,
    pub significant: f64,
    pub moderate: f64,
}

/// Weights and multipliers used by the holder score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub balance_weight: f64,
    pub time_weighted_weight: f64,
    pub sold_penalty_weight: f64,
    pub diamond_hands_bonus: f64,
    pub og_bonus: f64,
    pub paper_hands_penalty: f64,
    pub dump_penalties: DumpPenalties,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            balance_weight: defaults::BALANCE_WEIGHT,
            time_weighted_weight: defaults::TIME_WEIGHTED_WEIGHT,
            sold_penalty_weight: defaults::SOLD_PENALTY_WEIGHT,
            diamond_hands_bonus: defaults::DIAMOND_HANDS_BONUS,
            og_bonus: defaults::OG_BONUS,
            paper_hands_penalty: defaults::PAPER_HANDS_PENALTY,
            dump_penalties: DumpPenalties {
                major: defaults::MAJOR_DUMP_PENALTY,
                significant: defaults::SIGNIFICANT_DUMP_PENALTY,
                moderate: defaults::MODERATE_DUMP_PENALTY,
            },
        }
    }
}

impl ScoringConfig {
    /// Human-readable formula with the configured weights
    pub fn formula(&self) -> String {
        format!(
            "log10(balance + 1) * {} + log10(timeWeightedBalance + 1) * {} - log10(totalSold + 1) * {}",
            self.balance_weight, self.time_weighted_weight, self.sold_penalty_weight
        )
    }
}

/// Configuration for one leaderboard computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Transfers sent from this address mark the recipient as OG
    pub deployer_address: Address,
    pub scoring: ScoringConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deployer_address: defaults::DEPLOYER_ADDRESS,
            scoring: ScoringConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Build a config for the given deployer, using the default scoring constants
    pub fn new(deployer_address: &str) -> Result<Self, EngineError> {
        let deployer_address = Address::from_str(deployer_address.trim())
            .map_err(|_| EngineError::InvalidDeployerAddress(deployer_address.to_string()))?;

        if deployer_address == Address::ZERO {
            return Err(EngineError::InvalidDeployerAddress(deployer_address.to_string()));
        }

        Ok(Self {
            deployer_address,
            scoring: ScoringConfig::default(),
        })
    }

    /// Read `DEPLOYER_ADDRESS` from the environment (or `.env`), falling back to the default
    pub fn from_env() -> Result<Self, EngineError> {
        dotenvy::dotenv().ok();

        match env::var("DEPLOYER_ADDRESS") {
            Ok(value) => Self::new(&value),
            Err(_) => Ok(Self::default()),
        }
    }
}
