//! care-chat: terminal healthcare assistant with Hexagonal Architecture.
//!
//! Keyword routing answers known topics; everything else goes to an LLM backend.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
