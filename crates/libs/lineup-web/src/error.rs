//! Web error type and its HTTP mapping.
//!
//! Every client-facing message is chosen in [`Error::public_message`]. Handlers
//! never build their own error strings, so login and token failures keep
//! reading the same whichever check failed underneath.

use axum::{Json, http::StatusCode, response::IntoResponse};
use lineup_auth::error::Error as AuthError;
use lineup_models::error::Error as ModelsError;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

pub const MISSING_TOKEN: &str = "Missing token";
pub const INVALID_TOKEN: &str = "Invalid token";
pub const LOGIN_FAILED: &str = "Invalid email or password";
pub const NOT_FOUND: &str = "Not found";
pub const ALREADY_EXISTS: &str = "Already exists";
pub const REFERENCE_REJECTED: &str = "Conflicts with related records";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Models(#[from] ModelsError),

    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unknown email or wrong password.
    #[error("Wrong Credentials")]
    WrongCredentials,

    #[error("Context Missing")]
    CtxMissing,
}

/// JSON body of every error response, and of the logout response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::WrongCredentials | Error::CtxMissing => StatusCode::UNAUTHORIZED,
            Error::Auth(
                AuthError::MissingCredential
                | AuthError::MalformedCredential
                | AuthError::InvalidCredential,
            ) => StatusCode::UNAUTHORIZED,
            Error::Validation(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Models(ModelsError::NotFound) => StatusCode::NOT_FOUND,
            Error::Models(ModelsError::Duplicate | ModelsError::Reference) => StatusCode::CONFLICT,
            Error::Auth(_) | Error::Models(_) | Error::Join(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The only text a client ever sees for this error.
    pub fn public_message(&self) -> String {
        match self {
            Error::Auth(AuthError::MissingCredential) | Error::CtxMissing => {
                String::from(MISSING_TOKEN)
            }
            Error::Auth(AuthError::MalformedCredential | AuthError::InvalidCredential) => {
                String::from(INVALID_TOKEN)
            }
            Error::WrongCredentials => String::from(LOGIN_FAILED),
            Error::Validation(errors) => errors.to_string(),
            Error::BadRequest(message) => message.clone(),
            Error::Models(ModelsError::NotFound) => String::from(NOT_FOUND),
            Error::Models(ModelsError::Duplicate) => String::from(ALREADY_EXISTS),
            Error::Models(ModelsError::Reference) => String::from(REFERENCE_REJECTED),
            Error::Auth(_) | Error::Models(_) | Error::Join(_) => String::from(INTERNAL_ERROR),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Creating API error response for error: {:?}", self);
        } else {
            debug!("Rejecting request: {}", self);
        }

        (status, Json(MessageBody::new(self.public_message()))).into_response()
    }
}
