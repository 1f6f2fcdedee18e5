use std::path::PathBuf;

use clap::Parser;
use rs_trigram_core::{validate_max_length, ModelError, DEFAULT_MAX_LENGTH};

/// Largest request body accepted by `PUT /v1/train`.
pub const MAX_TRAINING_BYTES: usize = 16 * 1024 * 1024;

/// Command-line and environment configuration of the server.
#[derive(Parser, Debug, Clone)]
#[command(name = "rs-trigram-server", version, about = "HTTP front-end for a trigram text model")]
pub struct ServerConfig {
	/// Address to bind to
	#[arg(long, env = "RS_TRIGRAM_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to listen on
	#[arg(long, env = "RS_TRIGRAM_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Text file to train on before accepting requests
	#[arg(long, env = "RS_TRIGRAM_CORPUS")]
	pub corpus: Option<PathBuf>,

	/// Length used when `/v1/generate` is called without `max_length`
	#[arg(long, env = "RS_TRIGRAM_DEFAULT_MAX_LENGTH", default_value_t = DEFAULT_MAX_LENGTH)]
	pub default_max_length: usize,
}

impl ServerConfig {
	/// Checks settings that clap cannot express.
	///
	/// # Errors
	/// Returns [`ModelError::InvalidArgument`] if `default_max_length` exceeds
	/// the generation limit.
	pub fn validate(&self) -> Result<(), ModelError> {
		validate_max_length(self.default_max_length)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_core() {
		let config = ServerConfig::parse_from(["rs-trigram-server"]);
		assert_eq!(config.host, "127.0.0.1");
		assert_eq!(config.port, 5000);
		assert_eq!(config.corpus, None);
		assert_eq!(config.default_max_length, DEFAULT_MAX_LENGTH);
		assert_eq!(config.validate(), Ok(()));
	}

	#[test]
	fn oversized_default_length_is_rejected() {
		let config = ServerConfig::parse_from(["rs-trigram-server", "--default-max-length", "10001"]);
		assert!(matches!(config.validate(), Err(ModelError::InvalidArgument(_))));
	}

	#[test]
	fn flags_override_defaults() {
		let config = ServerConfig::parse_from([
			"rs-trigram-server",
			"--port",
			"8080",
			"--corpus",
			"data/corpus.txt",
			"--default-max-length",
			"12",
		]);
		assert_eq!(config.port, 8080);
		assert_eq!(config.corpus, Some(PathBuf::from("data/corpus.txt")));
		assert_eq!(config.default_max_length, 12);
	}
}
