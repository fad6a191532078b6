//! Error handling module for the to-do backend.
//!
//! Provides the application error type with mapping to HTTP status codes and
//! rendered HTML error pages.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::api::render;

/// User-visible messages, kept verbatim so existing clients keep matching them.
pub mod messages {
    pub const NAME_TAKEN: &str =
        "Registrierung fehlgeschlagen. Dieser Benutzername existiert bereits.";
    pub const AUTH_FAILED: &str = "Login fehlgeschlagen";
    pub const INVALID_SEARCH_FIELD: &str = "Ungültiger Suchtyp.";
    pub const SERVER_ERROR: &str =
        "Ein interner Fehler ist aufgetreten. Bitte versuche es später erneut.";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Registration with a user name that already exists
    NameTaken(String),
    /// Unknown user or wrong password; never tells the two apart
    AuthFailed,
    /// Toggle with an index outside the user's list
    OutOfRange { name: String, index: String },
    /// Search type outside title/description/dueDate/category
    InvalidSearchField(String),
    /// Rejected form input
    Validation(String),
    /// The JSON document could not be read or written
    StorageUnavailable(String),
    /// The JSON document could not be parsed
    StorageCorrupt(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    ///
    /// Errors the user can act on are answered with 200 and a message page.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NameTaken(_) => StatusCode::OK,
            AppError::AuthFailed => StatusCode::OK,
            AppError::InvalidSearchField(_) => StatusCode::OK,
            AppError::Validation(_) => StatusCode::OK,
            AppError::OutOfRange { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StorageCorrupt(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the client.
    pub fn message(&self) -> String {
        match self {
            AppError::NameTaken(_) => messages::NAME_TAKEN.to_string(),
            AppError::AuthFailed => messages::AUTH_FAILED.to_string(),
            AppError::InvalidSearchField(_) => messages::INVALID_SEARCH_FIELD.to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::OutOfRange { .. }
            | AppError::StorageUnavailable(_)
            | AppError::StorageCorrupt(_)
            | AppError::Internal(_) => messages::SERVER_ERROR.to_string(),
        }
    }

    /// Whether the error stems from the server rather than from user input.
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NameTaken(name) => write!(f, "user name {:?} is already taken", name),
            AppError::AuthFailed => write!(f, "authentication failed"),
            AppError::OutOfRange { name, index } => {
                write!(f, "todo index {:?} out of range for user {:?}", index, name)
            }
            AppError::InvalidSearchField(field) => write!(f, "invalid search field {:?}", field),
            AppError::Validation(msg) => write!(f, "validation failed: {}", msg),
            AppError::StorageUnavailable(msg) => write!(f, "storage unavailable: {}", msg),
            AppError::StorageCorrupt(msg) => write!(f, "storage corrupt: {}", msg),
            AppError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Storage I/O error: {:?}", err);
        AppError::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::StorageCorrupt(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::info!("Request rejected: {}", self);
        }

        let status = self.status_code();
        (status, Html(render::message_page(&self.message()))).into_response()
    }
}
