//! Application use cases. Orchestrate domain logic via ports.

pub mod fallback_responder;
pub mod response_router;

pub use fallback_responder::FallbackResponder;
pub use response_router::ResponseRouter;
