use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contracts::domain::common::ValidationError;
use thiserror::Error;

/// Ошибки операций магазина
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i32, available: i32 },
    #[error("Product not found: {0}")]
    ProductNotFound(i32),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl ShopError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShopError::InsufficientStock { .. } | ShopError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ShopError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            ShopError::Database(_) | ShopError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Текст ответа для пользователя (plain text, без внутренних деталей)
    pub fn user_message(&self) -> String {
        match self {
            ShopError::InsufficientStock { .. } => {
                "Error: Not enough quantity available".to_string()
            }
            ShopError::ProductNotFound(id) => format!("Error: Product {} not found", id),
            ShopError::Validation(e) => format!("Error: {}", e),
            ShopError::Database(_) | ShopError::Render(_) => {
                "Error: Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, self.user_message()).into_response()
    }
}
