//! Core domain layer. No external I/O dependencies.
//!
//! Entities, keyword tables and matching rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod keywords;
pub mod responses;

pub use entities::{ChatEntry, ChatTranscript, GenerationLimits, GenerationRequest, Route, Speaker};
pub use errors::DomainError;
pub use keywords::{EmergencyKeywordSet, KeywordMatcher, MatchMode, ResponseTable, Topic};
