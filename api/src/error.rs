use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use leaderboard_db::DbError;
use leaderboard_engine::EngineError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Data source error: {0}")]
    DataSource(#[from] DbError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("Invalid address: `{0}`")]
    InvalidAddress(String),

    #[error("Holder not found: `{0}`")]
    HolderNotFound(String),

    #[error("Invalid listen address: {0}")]
    ListenAddress(#[from] std::net::AddrParseError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            Self::InvalidQuery(_) => (StatusCode::BAD_REQUEST, "Invalid query"),
            Self::InvalidAddress(_) => (StatusCode::BAD_REQUEST, "Invalid address"),
            Self::HolderNotFound(_) => (StatusCode::NOT_FOUND, "Holder not found"),
            _ => {
                tracing::error!("Error fetching leaderboard: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch leaderboard")
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
