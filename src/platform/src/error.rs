use std::result;

use axum::response::IntoResponse;
use axum::response::Response;
use common::http::ApiError;
use metadata::error::MetadataError;
use thiserror::Error;

pub type Result<T> = result::Result<T, PlatformError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("can't parse bearer header")]
    CantParseBearerHeader,
    #[error("can't parse session token")]
    CantParseSessionToken,
}

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("bad request: {0:?}")]
    BadRequest(String),
    #[error("unauthorized: {0:?}")]
    Unauthorized(String),
    #[error("not found: {0:?}")]
    NotFound(String),
    #[error("internal: {0:?}")]
    Internal(String),
    #[error("invalid webhook")]
    InvalidWebhook,
    #[error("serde: {0:?}")]
    Serde(#[from] serde_json::Error),
    #[error("jsonwebtoken: {0:?}")]
    JSONWebToken(#[from] jsonwebtoken::errors::Error),
    #[error("metadata: {0:?}")]
    Metadata(#[from] MetadataError),
    #[error("auth: {0:?}")]
    Auth(#[from] AuthError),
    #[error("axum: {0:?}")]
    Axum(#[from] axum::http::Error),
    #[error("hyper: {0:?}")]
    Hyper(#[from] hyper::Error),
    #[error("other: {0:?}")]
    Other(#[from] anyhow::Error),
}

impl PlatformError {
    pub fn into_api_error(self) -> ApiError {
        match self {
            PlatformError::BadRequest(msg) => ApiError::bad_request(msg),
            PlatformError::Unauthorized(msg) => ApiError::unauthorized(msg),
            PlatformError::NotFound(msg) => ApiError::not_found(msg),
            PlatformError::Internal(msg) => ApiError::internal(msg),
            PlatformError::InvalidWebhook => ApiError::bad_request("Invalid webhook"),
            PlatformError::Serde(err) => ApiError::bad_request(err.to_string()),
            // token problems of any kind surface as a bare 401, the reason
            // stays in the server log
            PlatformError::JSONWebToken(_) => ApiError::unauthorized("Unauthorized"),
            PlatformError::Auth(_) => ApiError::unauthorized("Unauthorized"),
            PlatformError::Metadata(err) => match err {
                MetadataError::NotFound(msg) => ApiError::not_found(msg),
                MetadataError::AlreadyExists(msg) => ApiError::conflict(msg),
                other => ApiError::internal(other.to_string()),
            },
            PlatformError::Axum(err) => ApiError::internal(err.to_string()),
            PlatformError::Hyper(err) => ApiError::internal(err.to_string()),
            PlatformError::Other(err) => ApiError::internal(err.to_string()),
        }
    }
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        tracing::debug!("platform error: {:?}", self);
        self.into_api_error().into_response()
    }
}
