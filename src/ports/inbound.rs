//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: a front-end that drives a chat session against the router.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive session until the user leaves.
    async fn run(&self) -> Result<(), DomainError>;
}
