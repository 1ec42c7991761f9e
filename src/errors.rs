//! Crate-level error type
//!
//! Each concern has its own error enum; `Error` wraps them so callers that
//! mix pitch parsing, spelling and classification can use one `Result`.

use thiserror::Error;

use crate::models::modal::ModalError;
use crate::models::pitch::PitchError;
use crate::spelling::SpellingError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Pitch error: {0}")]
    Pitch(#[from] PitchError),

    #[error("Spelling failed: {0}")]
    Spelling(#[from] SpellingError),

    #[error("Modal classification failed: {0}")]
    Modal(#[from] ModalError),

    #[error("{0}")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
