use alloy::primitives::Address;
use num_bigint::BigInt;
use sqlx::{types::BigDecimal, Executor, Postgres};

use crate::{
    convert::{numeric_to_bigint, numeric_to_i64, numeric_to_u64, parse_address},
    error::DbError,
};

/// Transfer row as written by the indexer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Transfer {
    pub id: String,
    pub tx_hash: Option<String>,
    pub block_number: BigDecimal,
    pub timestamp: BigDecimal,
    pub log_index: i32,
    pub from: String,
    pub to: String,
    pub value: BigDecimal,
}

/// Typed transfer consumed by the leaderboard engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub id: String,
    pub tx_hash: Option<String>,
    pub block_number: u64,
    /// Block timestamp in unix seconds
    pub timestamp: i64,
    pub log_index: i32,
    pub from: Address,
    pub to: Address,
    /// Amount in base units
    pub value: BigInt,
}

impl TryFrom<Transfer> for TransferRecord {
    type Error = DbError;

    fn try_from(row: Transfer) -> Result<Self, Self::Error> {
        Ok(Self {
            block_number: numeric_to_u64(&row.block_number, "block_number")?,
            timestamp: numeric_to_i64(&row.timestamp, "timestamp")?,
            from: parse_address(&row.from, "from")?,
            to: parse_address(&row.to, "to")?,
            value: numeric_to_bigint(&row.value, "value")?,
            id: row.id,
            tx_hash: row.tx_hash,
            log_index: row.log_index,
        })
    }
}

impl Transfer {
    /// Load every transfer in chain order
    pub async fn find_all<'c, E>(schema: &str, connection: E) -> Result<Vec<Transfer>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = format!(
            r#"
            SELECT id, tx_hash, block_number, timestamp, log_index, "from", "to", value
            FROM {schema}.transfer
            ORDER BY block_number ASC, log_index ASC
            "#
        );

        sqlx::query_as::<_, Transfer>(&query)
            .fetch_all(connection)
            .await
    }

    /// Load every transfer and convert it into typed records
    pub async fn find_all_records<'c, E>(
        schema: &str,
        connection: E,
    ) -> Result<Vec<TransferRecord>, DbError>
    where
        E: Executor<'c, Database = Postgres>,
    {
        Self::find_all(schema, connection)
            .await?
            .into_iter()
            .map(TransferRecord::try_from)
            .collect()
    }
}
