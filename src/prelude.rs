use axum::{
    Json,
    extract::{
        multipart::MultipartRejection,
        rejection::{BytesRejection, FormRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub type Result<T> = core::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Job not found!")]
    NotFound,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid form data: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
    #[error("invalid form data: {0}")]
    MultipartRejection(#[from] MultipartRejection),
    #[error("invalid form data: {0}")]
    FormRejection(#[from] FormRejection),
    #[error("invalid form data: {0}")]
    Body(#[from] BytesRejection),
    #[error("unsupported form content type: {0}")]
    UnsupportedForm(String),
    #[error("Email failed: {0}")]
    Email(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed job store: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Multipart(e) => e.status(),
            AppError::MultipartRejection(e) => e.status(),
            AppError::FormRejection(e) => e.status(),
            AppError::Body(e) => e.status(),
            AppError::UnsupportedForm(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", &self);
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
