//! Mock generation adapter for running without a model server.
//!
//! Returns deterministic small-talk replies chosen from the prompt.

use crate::domain::{DomainError, GenerationRequest};
use crate::ports::TextGenerator;
use std::time::Duration;
use tracing::info;

const REPLIES: &[&str] = &[
    "That's an interesting question. Could you tell me a little more about it?",
    "I'm not sure I know much about that, but I'm happy to keep chatting.",
    "Thanks for sharing! What made you think about that today?",
    "I see. How are you feeling about it?",
];

/// Mock generator.
///
/// Returns predetermined responses without making API calls.
/// Simulates model latency with configurable delay.
pub struct MockGenerator {
    /// Simulated latency in milliseconds.
    delay_ms: u64,
}

impl MockGenerator {
    /// Create a new mock adapter with default delay (300ms).
    pub fn new() -> Self {
        Self { delay_ms: 300 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    fn pick_reply(prompt: &str) -> &'static str {
        let seed: usize = prompt.bytes().map(usize::from).sum();
        REPLIES[seed % REPLIES.len()]
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockGenerator {
    fn is_available(&self) -> bool {
        true
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
        info!(
            prompt_len = request.prompt.len(),
            "[MOCK] Simulating reply generation"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(format!("[MOCK] {}", Self::pick_reply(&request.prompt)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GenerationLimits;

    #[tokio::test]
    async fn test_mock_adapter_is_deterministic() {
        let adapter = MockGenerator::with_delay(1);
        let request = GenerationRequest::new("What's the weather like?", &GenerationLimits::default());

        let first = adapter.generate(&request).await.unwrap();
        let second = adapter.generate(&request).await.unwrap();

        assert!(adapter.is_available());
        assert!(first.starts_with("[MOCK] "));
        assert_eq!(first, second);
    }
}
