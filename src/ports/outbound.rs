//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, GenerationRequest};

/// External text-generation service (LLM, local model server, mock).
///
/// Constructed once at startup and injected into the fallback responder.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// False when the backend failed to initialize. Callers must not call
    /// `generate` in that case.
    fn is_available(&self) -> bool;

    /// Produce one decoded reply for `request.prompt`.
    ///
    /// # Errors
    /// Returns `DomainError::Generation` when the call fails or the output is unusable.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError>;
}
