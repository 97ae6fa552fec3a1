//! End-to-end routing through the public API with scripted generation backends.

use care_chat::adapters::ai::{MockGenerator, UnavailableGenerator};
use care_chat::domain::responses::{
    APOLOGY_REPHRASE, APOLOGY_UNAVAILABLE, DISCLAIMER, EMERGENCY_PHRASES, EMERGENCY_RESPONSE,
    TOPIC_RESPONSES,
};
use care_chat::domain::{DomainError, GenerationLimits, GenerationRequest, MatchMode, Route};
use care_chat::ports::TextGenerator;
use care_chat::usecases::{FallbackResponder, ResponseRouter};
use std::sync::Arc;

struct Failing;

#[async_trait::async_trait]
impl TextGenerator for Failing {
    fn is_available(&self) -> bool {
        true
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String, DomainError> {
        Err(DomainError::Generation("malformed output".to_string()))
    }
}

fn router_with(generator: Arc<dyn TextGenerator>) -> ResponseRouter {
    let fallback = FallbackResponder::new(generator, GenerationLimits::default());
    ResponseRouter::new(fallback, MatchMode::Substring).unwrap()
}

fn mock_router() -> ResponseRouter {
    router_with(Arc::new(MockGenerator::with_delay(0)))
}

#[tokio::test]
async fn every_emergency_phrase_overrides_topics() {
    let router = mock_router();
    for phrase in EMERGENCY_PHRASES {
        let input = format!("Symptom update: {} and some PAIN", phrase.to_uppercase());
        assert_eq!(router.route(&input).await, EMERGENCY_RESPONSE, "{}", input);
    }
}

#[tokio::test]
async fn every_topic_keyword_returns_its_canned_reply() {
    let router = mock_router();
    for (keyword, response) in TOPIC_RESPONSES {
        let input = format!("question about {}", keyword);
        assert_eq!(router.route(&input).await, *response);
    }
}

#[tokio::test]
async fn scenario_headache_and_fever() {
    let router = mock_router();
    let fever = TOPIC_RESPONSES
        .iter()
        .find(|(k, _)| *k == "fever")
        .map(|(_, r)| *r)
        .unwrap();
    assert_eq!(router.route("I have a severe headache and fever").await, fever);
}

#[tokio::test]
async fn scenario_weather_with_unavailable_backend() {
    let router = router_with(Arc::new(UnavailableGenerator::new("model failed to load")));
    assert_eq!(
        router.route("What's the weather like?").await,
        format!("{}{}", APOLOGY_UNAVAILABLE, DISCLAIMER)
    );
}

#[tokio::test]
async fn generation_failure_becomes_rephrase_apology() {
    let router = router_with(Arc::new(Failing));
    assert_eq!(
        router.route("What's the weather like?").await,
        format!("{}{}", APOLOGY_REPHRASE, DISCLAIMER)
    );
}

#[tokio::test]
async fn canned_replies_carry_no_disclaimer() {
    let router = mock_router();
    assert!(!router.route("my medication").await.ends_with(DISCLAIMER));
    assert!(!router.route("stroke").await.ends_with(DISCLAIMER));
}

#[test]
fn empty_input_classifies_as_fallback() {
    let router = mock_router();
    assert_eq!(router.classify(""), Route::Fallback);
}
