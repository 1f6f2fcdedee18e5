use thiserror::Error;

/// Errors surfaced synchronously to the caller of a [`TrigramModel`](crate::TrigramModel).
///
/// None of these are transient: retrying the same call on the same model
/// yields the same error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
	/// Generation was requested before any training data was fitted.
	#[error("model has not been trained: vocabulary is empty")]
	InvalidState,

	/// A caller-supplied argument is outside its accepted range.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}
