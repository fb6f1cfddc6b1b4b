use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

pub const EMPTY_ARTICLE_MESSAGE: &str = "Could not find enough text on that Wikipedia page.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{}", EMPTY_ARTICLE_MESSAGE)]
    EmptyArticle,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Invalid model output: {0}")]
    ModelOutput(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) | Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::InvalidBody(rejection) => rejection.status(),
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::EmptyArticle => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Upstream(_) | Error::ModelOutput(_) | Error::Reqwest(_) => {
                StatusCode::BAD_GATEWAY
            }
            Error::Config(_) | Error::Database(_) | Error::Migrate(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let error_message = match self {
            Error::BadRequest(msg) | Error::NotFound(msg) => msg,
            Error::EmptyArticle => EMPTY_ARTICLE_MESSAGE.to_string(),
            Error::Validation(err) => err.to_string(),
            Error::Reqwest(err) => format!("External service error: {}", err),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %error_message, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %error_message, "Request rejected");
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}
