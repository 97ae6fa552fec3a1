//! Generative fallback. Wraps the `TextGenerator` port and never fails outward.
//!
//! Unavailable backend and per-call failures map to two distinct apology texts.

use crate::domain::responses::{APOLOGY_REPHRASE, APOLOGY_UNAVAILABLE};
use crate::domain::{GenerationLimits, GenerationRequest};
use crate::ports::TextGenerator;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct FallbackResponder {
    generator: Arc<dyn TextGenerator>,
    limits: GenerationLimits,
}

impl FallbackResponder {
    pub fn new(generator: Arc<dyn TextGenerator>, limits: GenerationLimits) -> Self {
        Self { generator, limits }
    }

    pub fn is_available(&self) -> bool {
        self.generator.is_available()
    }

    /// Generated reply for `input`, or one of the fixed apologies. One attempt, no retries.
    pub async fn generate(&self, input: &str) -> String {
        if !self.generator.is_available() {
            debug!("generation backend unavailable; skipping call");
            return APOLOGY_UNAVAILABLE.to_string();
        }

        let request = GenerationRequest::new(input, &self.limits);
        match self.generator.generate(&request).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("generation returned empty text");
                APOLOGY_REPHRASE.to_string()
            }
            Err(e) => {
                warn!(error = %e, "generation failed");
                APOLOGY_REPHRASE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::sync::Mutex;

    /// Replays a fixed outcome and records the requests it saw.
    struct Scripted {
        available: bool,
        outcome: Result<&'static str, &'static str>,
        seen: Mutex<Vec<GenerationRequest>>,
    }

    impl Scripted {
        fn new(available: bool, outcome: Result<&'static str, &'static str>) -> Arc<Self> {
            Arc::new(Self {
                available,
                outcome,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl TextGenerator for Scripted {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
            self.seen.lock().unwrap().push(request.clone());
            self.outcome
                .map(str::to_string)
                .map_err(|e| DomainError::Generation(e.to_string()))
        }
    }

    #[tokio::test]
    async fn test_success_returns_generated_text() {
        let generator = Scripted::new(true, Ok("Sunny, I hope!"));
        let responder = FallbackResponder::new(generator.clone(), GenerationLimits::default());

        assert_eq!(responder.generate("What's the weather like?").await, "Sunny, I hope!");

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].prompt, "What's the weather like?");
        assert_eq!(seen[0].max_output_tokens, 100);
        assert_eq!(seen[0].candidates, 1);
    }

    #[tokio::test]
    async fn test_unavailable_skips_call() {
        let generator = Scripted::new(false, Ok("never used"));
        let responder = FallbackResponder::new(generator.clone(), GenerationLimits::default());

        assert_eq!(responder.generate("hello").await, APOLOGY_UNAVAILABLE);
        assert!(generator.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_call_failure_asks_to_rephrase() {
        let generator = Scripted::new(true, Err("connection reset"));
        let responder = FallbackResponder::new(generator, GenerationLimits::default());

        assert_eq!(responder.generate("hello").await, APOLOGY_REPHRASE);
    }

    #[tokio::test]
    async fn test_blank_output_asks_to_rephrase() {
        let generator = Scripted::new(true, Ok("   "));
        let responder = FallbackResponder::new(generator, GenerationLimits::default());

        assert_eq!(responder.generate("hello").await, APOLOGY_REPHRASE);
    }

    #[tokio::test]
    async fn test_prompt_is_truncated() {
        let generator = Scripted::new(true, Ok("ok"));
        let limits = GenerationLimits {
            max_input_tokens: 2,
            ..GenerationLimits::default()
        };
        let responder = FallbackResponder::new(generator.clone(), limits);

        responder.generate("tell me a long story").await;
        assert_eq!(generator.seen.lock().unwrap()[0].prompt, "tell me");
    }
}
