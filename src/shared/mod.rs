//! Cross-cutting infrastructure shared by adapters and wiring.

pub mod config;

pub use config::{AppConfig, GenBackend};
