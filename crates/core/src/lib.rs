//! # Graft Core
//!
//! Domain types, traits, and error definitions for the Graft
//! knowledge-grounded chat gateway. This crate has **zero framework
//! dependencies** — it defines the domain model that all other crates
//! implement against.
//!
//! ## Design Philosophy
//!
//! The provider seam is defined as a trait here; the single production
//! implementation lives in `graft-providers`. This enables:
//! - Testing the gateway with mock/stub providers
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result};
pub use message::{Conversation, ConversationId, Message, Role};
pub use provider::{ChatReply, ChatRequest, Provider, Usage};
