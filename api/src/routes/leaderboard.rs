//! Leaderboard API routes

use std::{str::FromStr, sync::Arc};

use alloy::primitives::Address;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use leaderboard_engine::{compute_holder_breakdown, compute_leaderboard, HolderBreakdown, LeaderboardEntry};

use crate::{error::ApiError, source::fetch_records, AppState};

/// Query params for the leaderboard endpoint
#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<usize>,
}

/// GET /leaderboard
/// Returns every active holder ranked by score
pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    params: Result<Query<LeaderboardParams>, QueryRejection>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let Query(params) = params?;
    let (transfers, swaps) = fetch_records(state.source.as_ref()).await?;

    // The only clock read for this request
    let now = Utc::now().timestamp();
    let mut entries = compute_leaderboard(&transfers, &swaps, &state.config, now);

    if let Some(limit) = params.limit {
        entries.truncate(limit);
    }

    Ok(Json(entries))
}

/// GET /leaderboard/:address
/// Returns one holder's row with its score breakdown
pub async fn get_holder(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Json<HolderBreakdown>, ApiError> {
    let holder = Address::from_str(address.trim())
        .map_err(|_| ApiError::InvalidAddress(address.clone()))?;

    let (transfers, swaps) = fetch_records(state.source.as_ref()).await?;

    let now = Utc::now().timestamp();
    compute_holder_breakdown(&transfers, &swaps, &state.config, now, &holder)
        .map(Json)
        .ok_or(ApiError::HolderNotFound(address))
}
