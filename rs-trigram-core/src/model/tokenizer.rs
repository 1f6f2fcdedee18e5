/// Normalizes raw text into word tokens.
///
/// - Lowercases the whole input
/// - Removes every character that is not an ASCII letter, an ASCII digit or whitespace
///   (punctuation, including sentence terminators, disappears entirely)
/// - Splits on runs of whitespace (the ASCII file, group, record and unit
///   separators count as whitespace)
///
/// Empty or punctuation-only input yields an empty vector.
///
/// # Example
/// ```
/// use rs_trigram_core::tokenize;
///
/// assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
	let cleaned: String = text
		.to_lowercase()
		.chars()
		.filter(|c| c.is_ascii_alphanumeric() || is_separator(*c))
		.collect();

	cleaned
		.split(is_separator)
		.filter(|word| !word.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Unicode whitespace plus the ASCII information separators (U+001C..=U+001F).
fn is_separator(c: char) -> bool {
	c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
