//! # Graft Retrieval
//!
//! Lexical relevance selection over a static knowledge corpus. Given the
//! corpus text and the user's latest message, this crate decides which
//! corpus sections are worth injecting into the system prompt.
//!
//! Everything here is a pure, synchronous, total function over strings:
//! no I/O during selection, no shared mutable state, no error conditions.
//! An absent corpus is the empty corpus; a query with no meaningful terms
//! selects everything. The design is deliberately biased toward recall —
//! including an irrelevant section costs less than silently dropping a
//! relevant one.
//!
//! ## Pipeline
//!
//! 1. [`segment`] splits the corpus into [`Section`]s at `## ` headings
//! 2. [`tokenize`] normalizes the query and section text into tokens
//! 3. [`select_relevant`] scores every section against the query tokens
//!    and returns the concatenated text of the sections that pass the
//!    threshold (always at least two when any exist)

pub mod corpus;
pub mod segment;
pub mod select;
pub mod token;

pub use corpus::Corpus;
pub use segment::{Section, segment};
pub use select::{
    MIN_SECTIONS, SCORE_THRESHOLD, ScoredSection, rank_sections, score_section, select_relevant,
    threshold_selection,
};
pub use token::tokenize;
