//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here; adapters map to and from these.

use chrono::{DateTime, Utc};
use std::fmt;

/// Who wrote a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => f.write_str("User"),
            Speaker::Assistant => f.write_str("Assistant"),
        }
    }
}

/// A single line of the chat transcript.
#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Session-scoped chat log. Owned by the UI layer; the router never sees it.
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    entries: Vec<ChatEntry>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.entries.push(ChatEntry {
            speaker,
            message: message.into(),
            sent_at: Utc::now(),
        });
    }

    /// Record one exchange: the user's message followed by the reply.
    pub fn push_exchange(&mut self, user_message: impl Into<String>, reply: impl Into<String>) {
        self.push(Speaker::User, user_message);
        self.push(Speaker::Assistant, reply);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Bounds applied to every generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    /// Prompt is cut to this many whitespace-separated tokens.
    pub max_input_tokens: usize,
    pub max_output_tokens: usize,
    /// Number of candidate sequences requested; only the first is used.
    pub candidates: u8,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_input_tokens: 512,
            max_output_tokens: 100,
            candidates: 1,
        }
    }
}

/// One request to the external text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_output_tokens: usize,
    pub candidates: u8,
}

impl GenerationRequest {
    /// Build a request from raw user input, truncated to `limits.max_input_tokens`.
    pub fn new(input: &str, limits: &GenerationLimits) -> Self {
        Self {
            prompt: truncate_tokens(input, limits.max_input_tokens).to_string(),
            max_output_tokens: limits.max_output_tokens,
            candidates: limits.candidates,
        }
    }
}

/// Keep at most `max_tokens` whitespace-separated tokens. Text under the cap is returned untouched.
fn truncate_tokens(text: &str, max_tokens: usize) -> &str {
    let mut count = 0;
    let mut in_token = false;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            in_token = false;
        } else if !in_token {
            in_token = true;
            count += 1;
            if count > max_tokens {
                return text[..idx].trim_end();
            }
        }
    }
    text
}

/// Which branch the router takes for a given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// An emergency phrase matched; overrides everything else.
    Emergency { phrase: &'static str },
    /// A topic keyword matched (first in table order).
    Topic {
        keyword: &'static str,
        response: &'static str,
    },
    /// Nothing matched; the generative fallback answers.
    Fallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_exchange_and_clear() {
        let mut transcript = ChatTranscript::new();
        transcript.push_exchange("hello", "hi there");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].speaker, Speaker::User);
        assert_eq!(transcript.entries()[1].speaker, Speaker::Assistant);
        assert_eq!(transcript.entries()[1].message, "hi there");

        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_truncate_keeps_short_input_verbatim() {
        assert_eq!(truncate_tokens("  What's   the weather?  ", 10), "  What's   the weather?  ");
    }

    #[test]
    fn test_truncate_cuts_at_token_limit() {
        assert_eq!(truncate_tokens("one two  three four", 2), "one two");
        assert_eq!(truncate_tokens("one two", 0), "");
    }

    #[test]
    fn test_request_applies_limits() {
        let limits = GenerationLimits {
            max_input_tokens: 3,
            max_output_tokens: 42,
            candidates: 1,
        };
        let request = GenerationRequest::new("a b c d e", &limits);
        assert_eq!(request.prompt, "a b c");
        assert_eq!(request.max_output_tokens, 42);
        assert_eq!(request.candidates, 1);
    }

    #[test]
    fn test_speaker_display() {
        assert_eq!(Speaker::User.to_string(), "User");
        assert_eq!(Speaker::Assistant.to_string(), "Assistant");
    }
}
