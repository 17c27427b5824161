//! Holder scoring module
//!
//! Scores holders on conviction and trading behavior:
//! - Base score: log-weighted balance and time-weighted balance, minus a sold penalty
//! - Modifiers: paper hands, diamond hands, OG and peak-dump tiers, applied in that order

pub mod holder_score;
pub mod log10;
pub mod modifiers;

pub use holder_score::{HolderScoreCalculator, HolderScoreResult};
pub use log10::approx_log10;
pub use modifiers::{DumpTier, Modifier, ModifierRule, MODIFIER_CHAIN};
