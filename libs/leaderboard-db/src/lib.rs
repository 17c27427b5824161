use std::env;

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    Pool, Postgres,
};

pub mod convert;
pub mod entity;
pub mod error;

// Re-export commonly used types
pub use entity::{Swap, SwapRecord, Transfer, TransferRecord};
pub use error::DbError;

mod defaults {
    pub const DATABASE_MAX_CONNECTIONS: &str = "5";
    pub const DATABASE_SCHEMA: &str = "public";
}

async fn create_pool(max_connections: u32) -> Result<Pool<Postgres>, sqlx::Error> {
    let conn = PgConnectOptions::new();

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(conn)
        .await
}

pub async fn initialize_database() -> Result<Pool<Postgres>, DbError> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let raw = env::var("DATABASE_MAX_CONNECTIONS")
        .unwrap_or(String::from(defaults::DATABASE_MAX_CONNECTIONS));
    let db_max_connections = raw
        .parse::<u32>()
        .map_err(|_| DbError::InvalidSetting("DATABASE_MAX_CONNECTIONS", raw))?;

    let pool = create_pool(db_max_connections).await?;

    Ok(pool)
}

/// Postgres schema holding the indexer's `transfer` and `swap` tables.
///
/// The name ends up interpolated into SQL, so only plain identifiers are accepted.
pub fn database_schema() -> Result<String, DbError> {
    dotenvy::dotenv().ok();

    let schema =
        env::var("DATABASE_SCHEMA").unwrap_or(String::from(defaults::DATABASE_SCHEMA));
    validate_schema(&schema)?;

    Ok(schema)
}

fn validate_schema(schema: &str) -> Result<(), DbError> {
    let mut chars = schema.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DbError::InvalidSetting("DATABASE_SCHEMA", schema.to_string()))
    }
}
