//! Response router. Decides between the emergency override, a canned topic reply,
//! and the generative fallback.
//!
//! Precedence is fixed: emergency phrases, then topic keywords in table order,
//! then the fallback with the disclaimer appended.

use crate::domain::responses::{DISCLAIMER, EMERGENCY_RESPONSE};
use crate::domain::{DomainError, EmergencyKeywordSet, MatchMode, ResponseTable, Route};
use crate::usecases::FallbackResponder;
use tracing::debug;

pub struct ResponseRouter {
    emergency: EmergencyKeywordSet,
    table: ResponseTable,
    fallback: FallbackResponder,
}

impl ResponseRouter {
    /// Compile the keyword tables for `mode` and wire in the fallback.
    pub fn new(fallback: FallbackResponder, mode: MatchMode) -> Result<Self, DomainError> {
        Ok(Self {
            emergency: EmergencyKeywordSet::new(mode)?,
            table: ResponseTable::new(mode)?,
            fallback,
        })
    }

    /// Which branch `input` takes. Does not call the generator.
    pub fn classify(&self, input: &str) -> Route {
        let lowered = input.to_lowercase();

        if let Some(phrase) = self.emergency.find(&lowered) {
            return Route::Emergency { phrase };
        }
        if let Some(topic) = self.table.lookup(&lowered) {
            return Route::Topic {
                keyword: topic.keyword,
                response: topic.response,
            };
        }
        Route::Fallback
    }

    /// Reply for `input`. Total: every failure has already become text.
    pub async fn route(&self, input: &str) -> String {
        match self.classify(input) {
            Route::Emergency { phrase } => {
                debug!(phrase, "emergency phrase matched");
                EMERGENCY_RESPONSE.to_string()
            }
            Route::Topic { keyword, response } => {
                debug!(keyword, "topic keyword matched");
                response.to_string()
            }
            Route::Fallback => {
                debug!(
                    input_len = input.len(),
                    available = self.fallback.is_available(),
                    "no keyword matched; using generative fallback"
                );
                // Original casing goes to the generator.
                let mut reply = self.fallback.generate(input).await;
                reply.push_str(DISCLAIMER);
                reply
            }
        }
    }
}
