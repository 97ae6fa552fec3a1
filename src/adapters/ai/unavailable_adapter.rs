//! Stand-in for a generation backend that failed to initialize.

use crate::domain::{DomainError, GenerationRequest};
use crate::ports::TextGenerator;

/// Records why the backend is unusable. `is_available()` is always false.
pub struct UnavailableGenerator {
    reason: String,
}

impl UnavailableGenerator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[async_trait::async_trait]
impl TextGenerator for UnavailableGenerator {
    fn is_available(&self) -> bool {
        false
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String, DomainError> {
        Err(DomainError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GenerationLimits;

    #[tokio::test]
    async fn test_unavailable_reports_reason() {
        let adapter = UnavailableGenerator::new("model server unreachable");
        assert!(!adapter.is_available());
        assert_eq!(adapter.reason(), "model server unreachable");

        let request = GenerationRequest::new("hi", &GenerationLimits::default());
        let err = adapter.generate(&request).await.unwrap_err();
        assert!(err.to_string().contains("model server unreachable"));
    }
}
