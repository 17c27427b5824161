use alloy::primitives::Address;
use num_bigint::BigInt;
use sqlx::{types::BigDecimal, Executor, Postgres};

use crate::{
    convert::{numeric_to_bigint, numeric_to_i64, numeric_to_u64, parse_address},
    error::DbError,
};

/// Pool swap row as written by the indexer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Swap {
    pub id: String,
    pub tx_hash: String,
    pub block_number: BigDecimal,
    pub timestamp: BigDecimal,
    pub log_index: i32,
    pub sender: String,
    pub recipient: String,
    pub amount0: BigDecimal,
    pub amount1: BigDecimal,
    pub effective_price: BigDecimal,
}

/// Typed swap consumed by the leaderboard engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRecord {
    pub id: String,
    pub tx_hash: String,
    pub block_number: u64,
    /// Block timestamp in unix seconds
    pub timestamp: i64,
    pub log_index: i32,
    pub sender: Address,
    pub recipient: Address,
    /// Tracked token leg: positive = sold into the pool, negative = bought out of it
    pub amount0: BigInt,
    /// Opposite leg, signed the same way
    pub amount1: BigInt,
    /// Fixed-point price with 18 implied decimals
    pub effective_price: BigInt,
}

impl TryFrom<Swap> for SwapRecord {
    type Error = DbError;

    fn try_from(row: Swap) -> Result<Self, Self::Error> {
        Ok(Self {
            block_number: numeric_to_u64(&row.block_number, "block_number")?,
            timestamp: numeric_to_i64(&row.timestamp, "timestamp")?,
            sender: parse_address(&row.sender, "sender")?,
            recipient: parse_address(&row.recipient, "recipient")?,
            amount0: numeric_to_bigint(&row.amount0, "amount0")?,
            amount1: numeric_to_bigint(&row.amount1, "amount1")?,
            effective_price: numeric_to_bigint(&row.effective_price, "effective_price")?,
            id: row.id,
            tx_hash: row.tx_hash,
            log_index: row.log_index,
        })
    }
}

impl Swap {
    /// Load every swap in chain order
    pub async fn find_all<'c, E>(schema: &str, connection: E) -> Result<Vec<Swap>, sqlx::Error>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let query = format!(
            r#"
            SELECT id, tx_hash, block_number, timestamp, log_index, sender, recipient,
                   amount0, amount1, effective_price
            FROM {schema}.swap
            ORDER BY block_number ASC, log_index ASC
            "#
        );

        sqlx::query_as::<_, Swap>(&query)
            .fetch_all(connection)
            .await
    }

    /// Load every swap and convert it into typed records
    pub async fn find_all_records<'c, E>(
        schema: &str,
        connection: E,
    ) -> Result<Vec<SwapRecord>, DbError>
    where
        E: Executor<'c, Database = Postgres>,
    {
        Self::find_all(schema, connection)
            .await?
            .into_iter()
            .map(SwapRecord::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_row_conversion_keeps_signs() {
        let row = Swap {
            id: "0x01".to_string(),
            tx_hash: "0xbeef".to_string(),
            block_number: BigDecimal::from(100u64),
            timestamp: BigDecimal::from(1_700_000_123i64),
            log_index: 7,
            sender: "0x3fc91a3afd70395cd496c647d5a6cc9d4b2b7fad".to_string(),
            recipient: "0x3fc91a3afd70395cd496c647d5a6cc9d4b2b7fad".to_string(),
            amount0: BigDecimal::from_str("-5000000000000000000").unwrap(),
            amount1: BigDecimal::from_str("2500000000000000").unwrap(),
            effective_price: BigDecimal::from_str("500000000000000").unwrap(),
        };

        let record = SwapRecord::try_from(row).unwrap();

        assert_eq!(record.amount0.to_string(), "-5000000000000000000");
        assert_eq!(record.amount1.to_string(), "2500000000000000");
        assert_eq!(record.effective_price.to_string(), "500000000000000");
        assert_eq!(record.sender, record.recipient);
        assert_eq!(record.log_index, 7);
    }
}
