use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use super::random_source::{RandomSource, RngSource};
use super::state::State;
use super::token::{Context, Token};
use super::tokenizer::tokenize;
use crate::error::ModelError;

/// Number of tokens generated when the caller has no preference.
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Upper bound accepted by [`validate_max_length`].
pub const MAX_GENERATION_LENGTH: usize = 10_000;

/// A word-level trigram language model.
///
/// The model maps every observed two-token context to the successors that
/// followed it, weighted by how often they did, and generates text by a
/// weighted random walk over that table.
///
/// # Responsibilities
/// - Build the trigram table from raw text (`fit`)
/// - Generate bounded-length text by weighted sampling (`generate`)
/// - Fall back to a uniform draw over the vocabulary for unseen contexts
///
/// # Training is additive
/// Each call to [`fit`](TrigramModel::fit) adds its counts to those already
/// present; it does not start over. Use [`reset`](TrigramModel::reset) or a
/// fresh instance to train from scratch.
///
/// # Invariants
/// - Every successor count is >= 1
/// - A context absent from the table was never observed
/// - The vocabulary holds each observed successor once, in first-seen order,
///   includes `Token::End` once trained and never contains `Token::Start`
#[derive(Clone, Debug, Default)]
pub struct TrigramModel {
	/// Mapping from a two-token context to its observed successors
	table: HashMap<Context, State>,

	/// Every token ever observed as a successor, in first-seen order
	vocabulary: Vec<Token>,

	/// Membership index over `vocabulary`
	known: HashSet<Token>,

	/// Tokens of the most recent `fit` call, kept for introspection only
	tokens: Vec<String>,
}

impl TrigramModel {
	/// Creates an empty, untrained model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Trains the model on `text`.
	///
	/// The text is tokenized, padded with two start markers and one end
	/// marker, and every window of three consecutive tokens `(w1, w2, w3)`
	/// increments the count of `w3` under `(w1, w2)`.
	///
	/// # Notes
	/// - Counts accumulate across calls on the same instance.
	/// - The stored token sequence (`tokens()`) is replaced, not extended.
	/// - Text without any word still records `(<s>, <s>) -> </s>`.
	pub fn fit(&mut self, text: &str) {
		let tokens = tokenize(text);

		let mut padded = Vec::with_capacity(tokens.len() + 3);
		padded.push(Token::Start);
		padded.push(Token::Start);
		padded.extend(tokens.iter().map(|word| Token::Word(word.clone())));
		padded.push(Token::End);

		for window in padded.windows(3) {
			let context = Context(window[0].clone(), window[1].clone());
			let next = window[2].clone();

			if !self.known.contains(&next) {
				self.known.insert(next.clone());
				self.vocabulary.push(next.clone());
			}
			self.table.entry(context).or_default().add_transition(next);
		}

		debug!(
			"fitted {} tokens ({} trigrams): {} contexts, {} vocabulary entries",
			tokens.len(),
			padded.len() - 2,
			self.table.len(),
			self.vocabulary.len()
		);

		self.tokens = tokens;
	}

	/// Generates up to `max_length` tokens using the thread-local RNG.
	///
	/// # Errors
	/// Returns [`ModelError::InvalidState`] if the model was never trained.
	pub fn generate(&self, max_length: usize) -> Result<String, ModelError> {
		self.generate_with(max_length, &mut RngSource::thread())
	}

	/// Generates up to `max_length` tokens, drawing every random decision from `source`.
	///
	/// Starting from `(<s>, <s>)`, each step samples a successor of the current
	/// context proportionally to its count, or uniformly from the whole
	/// vocabulary if the context was never observed. Drawing the end marker
	/// stops generation without emitting it.
	///
	/// # Returns
	/// The generated words joined by single spaces; empty if `max_length` is 0
	/// or the end marker is drawn first.
	///
	/// # Errors
	/// Returns [`ModelError::InvalidState`] if the model was never trained,
	/// whatever `max_length` is.
	pub fn generate_with<S: RandomSource + ?Sized>(
		&self,
		max_length: usize,
		source: &mut S,
	) -> Result<String, ModelError> {
		if self.vocabulary.is_empty() {
			return Err(ModelError::InvalidState);
		}

		let mut context = Context::start();
		let mut output: Vec<&Token> = Vec::new();

		for _ in 0..max_length {
			let next = match self.table.get(&context).and_then(|state| state.predict(source)) {
				Some(token) => token,
				None => {
					trace!("unseen context ({}, {}), sampling from vocabulary", context.0, context.1);
					&self.vocabulary[source.next_index(self.vocabulary.len())]
				}
			};

			if next.is_end() {
				break;
			}

			output.push(next);
			context = context.advance(next.clone());
		}

		Ok(output
			.iter()
			.map(|token| token.to_string())
			.collect::<Vec<_>>()
			.join(" "))
	}

	/// Returns the successors observed after `context`, if any.
	pub fn successors(&self, context: &Context) -> Option<&State> {
		self.table.get(context)
	}

	/// Read-only view of the whole trigram table.
	pub fn table(&self) -> &HashMap<Context, State> {
		&self.table
	}

	/// Every token observed as a successor, in first-seen order.
	pub fn vocabulary(&self) -> &[Token] {
		&self.vocabulary
	}

	/// Tokens of the most recent `fit` call.
	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Number of distinct contexts in the table.
	pub fn context_count(&self) -> usize {
		self.table.len()
	}

	/// Total number of trigram windows counted so far.
	pub fn trigram_count(&self) -> usize {
		self.table.values().map(State::total).sum()
	}

	/// Returns `true` once at least one `fit` call has run.
	pub fn is_trained(&self) -> bool {
		!self.vocabulary.is_empty()
	}

	/// Forgets everything learned, returning to the untrained state.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

/// Converts a signed length request into a generation length.
///
/// Negative requests are tolerated and mean "generate nothing".
pub fn max_length_from_signed(requested: i64) -> usize {
	usize::try_from(requested).unwrap_or(0)
}

/// Rejects generation lengths above [`MAX_GENERATION_LENGTH`].
///
/// # Errors
/// Returns [`ModelError::InvalidArgument`] if `max_length` is too large.
pub fn validate_max_length(max_length: usize) -> Result<usize, ModelError> {
	if max_length > MAX_GENERATION_LENGTH {
		return Err(ModelError::InvalidArgument(format!(
			"max_length must be at most {}, got {}",
			MAX_GENERATION_LENGTH, max_length
		)));
	}
	Ok(max_length)
}
