//! Column conversions from the indexer's storage types.
//!
//! Big integers are stored as `numeric(78, 0)` and addresses as lowercase hex text.

use std::str::FromStr;

use alloy::primitives::Address;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use sqlx::types::BigDecimal;

use crate::error::DbError;

/// Convert a `numeric` column holding an integer into a `BigInt`.
///
/// Fractional values are rejected rather than truncated.
pub fn numeric_to_bigint(value: &BigDecimal, column: &'static str) -> Result<BigInt, DbError> {
    if !value.is_integer() {
        return Err(DbError::InvalidInteger {
            column,
            value: value.to_string(),
        });
    }

    let (int, _) = value.with_scale(0).into_bigint_and_exponent();
    Ok(int)
}

/// Convert a `numeric` column into an `i64`, failing when out of range.
pub fn numeric_to_i64(value: &BigDecimal, column: &'static str) -> Result<i64, DbError> {
    numeric_to_bigint(value, column)?
        .to_i64()
        .ok_or_else(|| DbError::InvalidInteger {
            column,
            value: value.to_string(),
        })
}

/// Convert a `numeric` column into a `u64`, failing when out of range or negative.
pub fn numeric_to_u64(value: &BigDecimal, column: &'static str) -> Result<u64, DbError> {
    numeric_to_bigint(value, column)?
        .to_u64()
        .ok_or_else(|| DbError::InvalidInteger {
            column,
            value: value.to_string(),
        })
}

/// Parse a hex address column. Case is irrelevant.
pub fn parse_address(value: &str, column: &'static str) -> Result<Address, DbError> {
    Address::from_str(value.trim()).map_err(|_| DbError::InvalidAddress {
        column,
        value: value.to_string(),
    })
}
