//! Infrastructure adapters. Implement ports.
//!
//! Generation backends and the terminal chat UI. Map errors to DomainError.

pub mod ai;
pub mod ui;
