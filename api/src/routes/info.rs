//! API metadata

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use leaderboard_engine::leaderboard::format_address;

use crate::AppState;

/// GET /
/// Describes the endpoints, scoring formula and configured constants
pub async fn root(State(state): State<Arc<AppState>>) -> Json<Value> {
    let scoring = &state.config.scoring;
    let dump = &scoring.dump_penalties;

    Json(json!({
        "message": "Holder Leaderboard API",
        "endpoints": {
            "/leaderboard": "Get holder leaderboard with scores calculated from transfer and swap data",
            "/leaderboard/:address": "Get a single holder with its score breakdown",
            "/health": "Health check",
        },
        "scoring": {
            "formula": scoring.formula(),
            "weights": {
                "balance": scoring.balance_weight,
                "timeWeightedBalance": scoring.time_weighted_weight,
                "soldPenalty": scoring.sold_penalty_weight,
            },
            "bonuses": {
                "Diamond hands (never sold)": format!("{}x", scoring.diamond_hands_bonus),
                "OG (received from deployer)": format!("{}x", scoring.og_bonus),
            },
            "penalties": {
                "Sold everything": format!("{}x", scoring.paper_hands_penalty),
                "Major dump (90%+ from peak)": format!("{}x", dump.major),
                "Significant dump (75%+ from peak)": format!("{}x", dump.significant),
                "Moderate dump (50%+ from peak)": format!("{}x", dump.moderate),
            },
        },
        "statusFlags": {
            "isDiamondHands": "Never sold any tokens (totalSold = 0)",
            "isPaperHands": "Sold everything (balance = 0 and totalSold > 0)",
            "isOG": "Received tokens directly from deployer",
        },
        "config": {
            "deployerAddress": format_address(&state.config.deployer_address),
        },
    }))
}
