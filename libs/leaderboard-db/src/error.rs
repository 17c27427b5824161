use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Invalid `{0}` setting: `{1}`")]
    InvalidSetting(&'static str, String),

    #[error("Invalid address in column `{column}`: `{value}`")]
    InvalidAddress { column: &'static str, value: String },

    #[error("Invalid integer in column `{column}`: `{value}`")]
    InvalidInteger { column: &'static str, value: String },
}
