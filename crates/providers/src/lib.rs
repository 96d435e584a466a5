//! LLM provider implementation for Graft.
//!
//! Exactly one backend exists: the Anthropic Messages API. The
//! [`graft_core::Provider`] trait it implements is a testing seam, not a
//! routing layer — there is no provider registry or fallback chain.

pub mod anthropic;

pub use anthropic::AnthropicClient;
