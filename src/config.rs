//! Runtime configuration, read from the environment.

use std::time::Duration;

use crate::{
	error::{Error, Result},
	fetch::{DEFAULT_MAX_BODY_BYTES, DEFAULT_TIMEOUT},
	url::DEFAULT_BASE_URL,
	ApiKey,
};

/// Environment variable holding the provider access key. Required.
pub const API_KEY_ENV_VAR: &str = "EXCHANGE_API_KEY";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "EXCHANGE_API_BASE_URL";

/// Environment variable overriding [`DEFAULT_TIMEOUT`], in whole seconds.
pub const TIMEOUT_ENV_VAR: &str = "EXCHANGE_API_TIMEOUT_SECS";

/// Environment variable overriding [`DEFAULT_MAX_BODY_BYTES`].
pub const MAX_BODY_BYTES_ENV_VAR: &str = "EXCHANGE_API_MAX_BODY_BYTES";

/// Settings for an [`ExchangeRateClient`](crate::ExchangeRateClient).
#[derive(Debug, Clone)]
pub struct Config {
	/// The provider access key.
	pub api_key: ApiKey,
	/// The API root the `latest` path is appended to.
	pub base_url: String,
	/// The whole-request timeout.
	pub timeout: Duration,
	/// The largest accepted response body.
	pub max_body_bytes: usize,
}

impl Config {
	/// Creates a [`Config`] with the given key and defaults for the rest.
	pub fn new(api_key: ApiKey) -> Self {
		Self {
			api_key,
			base_url: DEFAULT_BASE_URL.to_owned(),
			timeout: DEFAULT_TIMEOUT,
			max_body_bytes: DEFAULT_MAX_BODY_BYTES,
		}
	}

	/// Reads the configuration from the process environment, after loading `.env` if present.
	pub fn from_env() -> Result<Self> {
		if let Ok(path) = dotenvy::dotenv() {
			tracing::debug!("loaded {}", path.display());
		}
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads the configuration through `lookup`, which maps a variable name to its value.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let api_key = lookup(API_KEY_ENV_VAR)
			.ok_or_else(|| Error::ConfigError(format!("{API_KEY_ENV_VAR} is not set")))?;
		let mut config = Self::new(ApiKey::try_from(api_key.as_str())?);

		if let Some(base_url) = lookup(BASE_URL_ENV_VAR).filter(|url| !url.trim().is_empty()) {
			config.base_url = base_url;
		}
		if let Some(secs) = lookup(TIMEOUT_ENV_VAR) {
			config.timeout = Duration::from_secs(parse_var(TIMEOUT_ENV_VAR, &secs)?);
		}
		if let Some(bytes) = lookup(MAX_BODY_BYTES_ENV_VAR) {
			config.max_body_bytes = parse_var(MAX_BODY_BYTES_ENV_VAR, &bytes)?;
		}
		Ok(config)
	}
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
	value
		.trim()
		.parse()
		.map_err(|_| Error::ConfigError(format!("{name} is not a non-negative integer: {value:?}")))
}
