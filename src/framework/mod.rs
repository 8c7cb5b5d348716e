//! Generic resource actor used to hold placed orders.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by an actor
//! - [`ResourceActor`] - Task that owns the entities and processes requests one at a time
//! - [`ResourceClient`] - Cloneable handle that sends requests to the actor
//! - [`FrameworkError`] - Transport and lookup failures
//!
//! # Testing
//!
//! See [`mock`] for helpers that stand in for a running actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
