use std::collections::HashMap;

use super::random_source::RandomSource;
use super::token::Token;

/// Successors observed after one context of a trigram model.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate successor occurrences during training
/// - Pick the next token using weighted random sampling
///
/// ## Invariants
/// - Each successor appears once
/// - Each occurrence count is strictly positive
/// - Successors keep the order in which they were first observed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
	/// Outgoing transitions with how many times each was observed.
	/// Example: [("sat", 1), ("ran", 1)]
	transitions: Vec<(Token, usize)>,

	/// Position of each successor in `transitions`.
	index: HashMap<Token, usize>,
}

impl State {
	/// Creates a new empty state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an occurrence of a transition toward `next`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is appended with an initial count of 1.
	pub fn add_transition(&mut self, next: Token) {
		match self.index.get(&next) {
			Some(&position) => self.transitions[position].1 += 1,
			None => {
				self.index.insert(next.clone(), self.transitions.len());
				self.transitions.push((next, 1));
			}
		}
	}

	/// Returns how often `token` followed this context (0 if never).
	pub fn count(&self, token: &Token) -> usize {
		self.index
			.get(token)
			.map_or(0, |&position| self.transitions[position].1)
	}

	/// Sum of all occurrence counts.
	pub fn total(&self) -> usize {
		self.transitions.iter().map(|(_, occurrence)| occurrence).sum()
	}

	/// Iterates over `(successor, count)` pairs in first-seen order.
	pub fn transitions(&self) -> impl Iterator<Item = (&Token, usize)> {
		self.transitions.iter().map(|(token, occurrence)| (token, *occurrence))
	}

	/// Returns `true` if no successor was ever recorded.
	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Picks the next token using weighted random sampling.
	///
	/// The probability of selecting a token is proportional to its
	/// occurrence count. A single index in `0..total` is drawn and the
	/// transitions are scanned with a cumulative subtraction, so index 0
	/// always lands on the first-seen successor.
	///
	/// Returns `None` if the state has no transitions.
	pub fn predict<S: RandomSource + ?Sized>(&self, source: &mut S) -> Option<&Token> {
		if self.is_empty() {
			return None;
		}

		let mut r = source.next_index(self.total());
		for (token, occurrence) in &self.transitions {
			if r < *occurrence {
				return Some(token);
			}
			r -= occurrence;
		}

		// Only reachable if the source ignores its upper bound.
		self.transitions.last().map(|(token, _)| token)
	}
}
