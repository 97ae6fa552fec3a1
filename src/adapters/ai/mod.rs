//! Generation adapters. Implement TextGenerator for LLM integration.
//!
//! Provides an OpenAI-compatible adapter, a mock adapter for development, and a
//! placeholder for a backend that failed to start.

pub mod mock_adapter;
pub mod openai_adapter;
pub mod unavailable_adapter;

pub use mock_adapter::MockGenerator;
pub use openai_adapter::OpenAiGenerator;
pub use unavailable_adapter::UnavailableGenerator;
