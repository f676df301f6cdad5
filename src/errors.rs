use actix_web::HttpResponse;
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unknown catalog item: {0}")]
    UnknownCatalogItem(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable, machine-readable error code included in every error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::UnknownCatalogItem(_) => "unknown_catalog_item",
            AppError::Internal(_) => "internal",
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => AppError::NotFound,
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::UnknownCatalogItem(msg) => AppError::UnknownCatalogItem(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": self.to_string(),
                "code": self.code()
            })),
            AppError::BadRequest(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": self.to_string(),
                "code": self.code()
            })),
            AppError::UnknownCatalogItem(_) => {
                log::warn!("Rejected order: {}", self);
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": self.to_string(),
                    "code": self.code()
                }))
            }
            AppError::Internal(msg) => {
                log::error!("Request failed: {}", msg);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal server error",
                    "code": self.code()
                }))
            }
        }
    }
}

/// Failures while bringing the service up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create database pool: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("failed to run database migrations: {0}")]
    Migration(String),

    #[error("failed to seed catalog: {0}")]
    Seed(#[from] DomainError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
