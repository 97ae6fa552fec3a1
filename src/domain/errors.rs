//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. None of them reach the user:
//! the fallback responder turns generation errors into apology text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// A single generation call failed (transport, status, malformed output).
    #[error("Generation failed: {0}")]
    Generation(String),

    /// The generation backend could not be initialized at startup.
    #[error("Generation backend unavailable: {0}")]
    Unavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
