use std::fmt;

/// A unit of the trigram model.
///
/// Words are produced by [`tokenize`](crate::tokenize) and are always
/// lowercase ASCII alphanumeric. The two sentinels are separate variants, so no
/// word can ever be mistaken for a boundary marker.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
	/// Padding placed twice before the first word of a training text.
	Start,
	/// Padding placed once after the last word; generation stops on it.
	End,
	/// A normalized word.
	Word(String),
}

impl Token {
	pub fn is_end(&self) -> bool {
		matches!(self, Token::End)
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Token::Start => f.write_str("<s>"),
			Token::End => f.write_str("</s>"),
			Token::Word(word) => f.write_str(word),
		}
	}
}

impl From<&str> for Token {
	fn from(word: &str) -> Self {
		Token::Word(word.to_owned())
	}
}

/// The two tokens preceding a successor, used as the table key.
///
/// Equality and hashing depend only on the two tokens, never on when
/// the context was first observed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Context(pub Token, pub Token);

impl Context {
	/// Context every generation starts from: `(<s>, <s>)`.
	pub fn start() -> Self {
		Context(Token::Start, Token::Start)
	}

	/// Slides the window by one token: `(w1, w2)` becomes `(w2, next)`.
	pub fn advance(self, next: Token) -> Self {
		Context(self.1, next)
	}
}
