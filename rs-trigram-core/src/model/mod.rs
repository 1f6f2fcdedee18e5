//! Top-level module for the trigram generation system.
//!
//! This module provides a word-level trigram text generator, including:
//! - Text normalization (`tokenizer`)
//! - Token and context types (`Token`, `Context`)
//! - Per-context successor counts (`State`)
//! - Injectable randomness (`RandomSource`)
//! - The trained model itself (`TrigramModel`)

/// Lowercasing, punctuation stripping and whitespace splitting.
pub mod tokenizer;

/// Word and sentinel tokens, and the two-token lookup context.
pub mod token;

/// Strategy used to draw random indices during generation.
///
/// Lets tests substitute scripted sequences for the thread RNG.
pub mod random_source;

/// Trigram model: training, generation and introspection.
pub mod trigram_model;

/// Internal representation of the successors observed after one context.
///
/// Tracks successor counts and supports weighted random sampling.
pub mod state;
