use pretty_assertions::assert_eq;
use rs_trigram_core::{Context, Token, TrigramModel, tokenize};

const CORPUS: &str = "The cat sat on the mat. The cat ran!";

#[test]
fn counts_sum_to_number_of_windows() {
	let mut model = TrigramModel::new();
	model.fit(CORPUS);

	// two start markers + words + one end marker, minus two
	let padded_len = tokenize(CORPUS).len() + 3;
	assert_eq!(model.trigram_count(), padded_len - 2);
}

#[test]
fn vocabulary_covers_every_word_and_end_marker() {
	let mut model = TrigramModel::new();
	model.fit(CORPUS);

	for word in tokenize(CORPUS) {
		assert!(model.vocabulary().contains(&Token::Word(word.clone())), "missing {word}");
	}
	assert!(model.vocabulary().contains(&Token::End));
	assert!(!model.vocabulary().contains(&Token::Start));
}

#[test]
fn vocabulary_has_no_duplicates() {
	let mut model = TrigramModel::new();
	model.fit("a a a a b a");
	model.fit("b b a");

	assert_eq!(
		model.vocabulary(),
		&[Token::from("a"), Token::from("b"), Token::End]
	);
}

#[test]
fn fresh_models_train_identically() {
	let mut first = TrigramModel::new();
	first.fit(CORPUS);
	let mut second = TrigramModel::new();
	second.fit(CORPUS);

	assert_eq!(first.table(), second.table());
	assert_eq!(first.vocabulary(), second.vocabulary());
}

#[test]
fn the_cat_context_has_both_successors() {
	let mut model = TrigramModel::new();
	model.fit("the cat sat on the mat the cat ran");

	let state = model
		.successors(&Context(Token::from("the"), Token::from("cat")))
		.expect("context was trained");
	let counts: Vec<(String, usize)> = state
		.transitions()
		.map(|(token, count)| (token.to_string(), count))
		.collect();

	assert_eq!(counts, vec![("sat".to_owned(), 1), ("ran".to_owned(), 1)]);
	assert_eq!(
		model.successors(&Context(Token::from("cat"), Token::from("ran"))).unwrap().count(&Token::End),
		1
	);
}

#[test]
fn tokens_reflect_last_fit_only() {
	let mut model = TrigramModel::new();
	model.fit("first text");
	model.fit("Second, text!");

	assert_eq!(model.tokens(), &["second", "text"]);
}

#[test]
fn unseen_context_is_absent_from_table() {
	let mut model = TrigramModel::new();
	model.fit(CORPUS);

	assert!(model.successors(&Context(Token::from("mat"), Token::from("ran"))).is_none());
}
