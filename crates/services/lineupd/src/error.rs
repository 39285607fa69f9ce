//! Startup errors of the LineUps server.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Auth(#[from] lineup_auth::error::Error),

    #[error(transparent)]
    Models(#[from] lineup_models::error::Error),

    #[error("Invalid {0}: {1}")]
    InvalidVar(&'static str, String),
}
