//! Trigram-based text generation library.
//!
//! This crate provides a word-level trigram language model including:
//! - Text normalization into word tokens
//! - Trigram frequency counting over padded token sequences
//! - Weighted random generation with a uniform vocabulary fallback
//! - An injectable random source for reproducible generation
//!
//! Only the model API and its supporting types are exposed publicly.

/// Core trigram model, tokenizer and sampling logic.
pub mod model;

/// Errors reported by the model.
pub mod error;

pub use error::ModelError;
pub use model::random_source::{RandomSource, RngSource};
pub use model::state::State;
pub use model::token::{Context, Token};
pub use model::tokenizer::tokenize;
pub use model::trigram_model::{
	DEFAULT_MAX_LENGTH, MAX_GENERATION_LENGTH, TrigramModel, max_length_from_signed, validate_max_length,
};
