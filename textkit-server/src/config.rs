use std::path::Path;
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config file {path}: {source}")]
	Read { path: String, source: io::Error },

	#[error("failed to parse config file: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("invalid value '{value}' for {key}")]
	InvalidValue { key: &'static str, value: String },

	#[error("invalid configuration: {0}")]
	Invalid(String),
}

/// Server settings.
///
/// Sources, later ones win:
/// - built-in defaults
/// - a TOML file named by `TEXTKIT_CONFIG`
/// - `TEXTKIT_HOST`, `TEXTKIT_PORT`, `TEXTKIT_WORKERS`, `TEXTKIT_MAX_UPLOAD_BYTES`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	/// Number of actix worker threads.
	pub workers: usize,
	/// Largest accepted upload, in bytes.
	pub max_upload_bytes: usize,
	/// Largest accepted JSON body, in bytes.
	pub max_json_bytes: usize,
	/// Keywords returned by `/v1/upload` when `top_n` is not given.
	pub keyword_count: usize,
	/// Characters of extracted text echoed back by `/v1/upload`.
	pub excerpt_chars: usize,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			workers: num_cpus::get(),
			max_upload_bytes: 10 * 1024 * 1024,
			max_json_bytes: 2 * 1024 * 1024,
			keyword_count: textkit_core::analysis::keywords::DEFAULT_KEYWORD_COUNT,
			excerpt_chars: 500,
		}
	}
}

impl ServerConfig {
	/// Loads the configuration from the file named by `TEXTKIT_CONFIG` (if any)
	/// and the process environment.
	pub fn load() -> Result<Self, ConfigError> {
		let mut config = match env::var("TEXTKIT_CONFIG") {
			Ok(path) => Self::from_file(path)?,
			Err(_) => Self::default(),
		};
		config.apply_env(|key| env::var(key).ok())?;
		config.validate()?;
		Ok(config)
	}

	/// Reads a TOML file; missing keys keep their default.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path)
			.map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
		Self::from_toml(&contents)
	}

	pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(contents)?)
	}

	/// Overrides fields from environment-style variables returned by `lookup`.
	pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(host) = lookup("TEXTKIT_HOST") {
			self.host = host;
		}
		if let Some(port) = lookup("TEXTKIT_PORT") {
			self.port = parse_var("TEXTKIT_PORT", port)?;
		}
		if let Some(workers) = lookup("TEXTKIT_WORKERS") {
			self.workers = parse_var("TEXTKIT_WORKERS", workers)?;
		}
		if let Some(max_upload) = lookup("TEXTKIT_MAX_UPLOAD_BYTES") {
			self.max_upload_bytes = parse_var("TEXTKIT_MAX_UPLOAD_BYTES", max_upload)?;
		}
		Ok(())
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.workers == 0 {
			return Err(ConfigError::Invalid("workers must be >= 1".to_owned()));
		}
		if self.keyword_count == 0 {
			return Err(ConfigError::Invalid("keyword_count must be >= 1".to_owned()));
		}
		if self.max_upload_bytes == 0 || self.max_json_bytes == 0 {
			return Err(ConfigError::Invalid("body limits must be > 0".to_owned()));
		}
		Ok(())
	}
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
	value.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	#[test]
	fn defaults_are_valid() {
		let config = ServerConfig::default();
		assert!(config.validate().is_ok());
		assert_eq!(config.port, 5000);
		assert_eq!(config.keyword_count, 5);
	}

	#[test]
	fn toml_overrides_only_given_keys() {
		let config = ServerConfig::from_toml("port = 8080\nexcerpt_chars = 100\n").unwrap();
		assert_eq!(config.port, 8080);
		assert_eq!(config.excerpt_chars, 100);
		assert_eq!(config.host, "127.0.0.1");
	}

	#[test]
	fn bad_toml_is_a_parse_error() {
		assert!(matches!(ServerConfig::from_toml("port = \"x\""), Err(ConfigError::Parse(_))));
	}

	#[test]
	fn env_overrides_fields() {
		let vars: HashMap<&str, &str> = [("TEXTKIT_HOST", "0.0.0.0"), ("TEXTKIT_PORT", "9000")].into();
		let mut config = ServerConfig::default();
		config.apply_env(|key| vars.get(key).map(|v| v.to_string())).unwrap();
		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.port, 9000);
	}

	#[test]
	fn env_rejects_non_numeric_port() {
		let mut config = ServerConfig::default();
		let err = config
			.apply_env(|key| (key == "TEXTKIT_PORT").then(|| "http".to_owned()))
			.unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { key: "TEXTKIT_PORT", .. }));
	}

	#[test]
	fn zero_workers_is_invalid() {
		let config = ServerConfig { workers: 0, ..ServerConfig::default() };
		assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
	}

	#[test]
	fn missing_file_is_a_read_error() {
		assert!(matches!(
			ServerConfig::from_file("./no/such/textkit.toml"),
			Err(ConfigError::Read { .. })
		));
	}
}
