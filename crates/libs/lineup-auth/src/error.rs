/// Errors raised by the authentication core.
///
/// The three credential variants are kept apart so callers can log and test
/// them separately; how much of that distinction reaches a client is decided
/// by the web layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Token Missing")]
    MissingCredential,

    #[error("Token Malformed")]
    MalformedCredential,

    #[error("Token Invalid")]
    InvalidCredential,

    #[error("Signing secret is not configured")]
    MissingSecret,

    #[error(transparent)]
    Issuance(#[from] jsonwebtoken::errors::Error),

    #[error("Error hashing password {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("Invalid hashing parameters {0}")]
    HashParams(argon2::Error),

    #[error("Invalid configuration value for {0}")]
    Config(&'static str),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

impl From<argon2::Error> for Error {
    fn from(value: argon2::Error) -> Self {
        Self::HashParams(value)
    }
}
