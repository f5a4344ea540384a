//! [`Error`] type.

use crate::currency::InvalidCurrencyCodeError;

/// A [`Result`](std::result::Result) with [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error from configuration, input, the HTTP transfer or the API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The configuration is missing or malformed.
	#[error("configuration error: {0}")]
	ConfigError(String),
	/// The requested currency code is malformed.
	#[error("input error: {0}")]
	InputError(#[from] InvalidCurrencyCodeError),
	/// The transfer failed before a complete response was received.
	#[error("transport error: {0}")]
	TransportError(#[source] Box<dyn std::error::Error + Send + Sync>),
	/// The API responded with a non-success status.
	#[error("http status {status}{}", .error_type.as_deref().map(|t| format!(" ({t})")).unwrap_or_default())]
	HttpStatusError {
		/// The HTTP status code.
		status: u16,
		/// The provider's `error-type`, if the body carried one.
		error_type: Option<String>,
	},
	/// The rate-limit was hit.
	#[error("you have hit your rate limit or your monthly limit")]
	RateLimitError,
	/// The API responded successfully but reported an error in the payload.
	#[error("api error: {error_type}")]
	ApiError {
		/// The provider's `error-type`.
		error_type: String,
	},
	/// Failed to parse the response.
	#[error("failed to parse the response: {0}")]
	ResponseParseError(#[from] serde_json::Error),
	/// Reading the prompt answer or writing the output failed.
	#[error("console error: {0}")]
	IoError(#[from] std::io::Error),
}

impl Error {
	/// Wraps any error as a [`TransportError`](Error::TransportError).
	pub fn transport(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		Self::TransportError(error.into())
	}

	/// A short, stable name of the error variant, for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::ConfigError(_) => "config",
			Self::InputError(_) => "input",
			Self::TransportError(_) => "transport",
			Self::HttpStatusError { .. } => "http_status",
			Self::RateLimitError => "rate_limit",
			Self::ApiError { .. } => "api",
			Self::ResponseParseError(_) => "parse",
			Self::IoError(_) => "io",
		}
	}
}

impl From<reqwest::Error> for Error {
	fn from(error: reqwest::Error) -> Self {
		// the url carries the api key
		Self::transport(error.without_url())
	}
}
