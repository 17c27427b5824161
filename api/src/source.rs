//! Record sources
//!
//! The engine always works on the complete transfer and swap sets. Sources
//! hand those over in one bulk read each, with no pagination.

use async_trait::async_trait;
use leaderboard_db::{DbError, Swap, SwapRecord, Transfer, TransferRecord};
use sqlx::{Pool, Postgres};

/// Read access to the indexer's record streams
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn transfers(&self) -> Result<Vec<TransferRecord>, DbError>;

    async fn swaps(&self) -> Result<Vec<SwapRecord>, DbError>;
}

/// Postgres tables written by the indexer
pub struct PgRecordSource {
    db_pool: Pool<Postgres>,
    schema: String,
}

impl PgRecordSource {
    pub fn new(db_pool: Pool<Postgres>, schema: String) -> Self {
        Self { db_pool, schema }
    }
}

#[async_trait]
impl RecordSource for PgRecordSource {
    async fn transfers(&self) -> Result<Vec<TransferRecord>, DbError> {
        Transfer::find_all_records(&self.schema, &self.db_pool).await
    }

    async fn swaps(&self) -> Result<Vec<SwapRecord>, DbError> {
        Swap::find_all_records(&self.schema, &self.db_pool).await
    }
}

/// Fetch both record sets concurrently
pub async fn fetch_records(
    source: &dyn RecordSource,
) -> Result<(Vec<TransferRecord>, Vec<SwapRecord>), DbError> {
    let (transfers, swaps) = tokio::try_join!(source.transfers(), source.swaps())?;

    tracing::debug!("Fetched {} transfers and {} swaps", transfers.len(), swaps.len());

    Ok((transfers, swaps))
}
