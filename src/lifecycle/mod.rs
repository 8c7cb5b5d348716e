//! # Lifecycle
//!
//! Starts the order book actor, wires it to the conversation flow, and shuts
//! it down again.

pub mod ordering_service;
pub mod tracing;

pub use self::ordering_service::OrderingService;
pub use self::tracing::setup_tracing;
